//! Command-line front end for the fixedwidth operation registry.

use std::hint::black_box;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fixedwidth::dispatch::{Value, default_registry};
use fixedwidth::util::{from_hex, to_hex};
use fixedwidth::{Buffer, Endian, FloatWidth, IntType, Integer, decode_float, decode_int, encode_float, encode_int};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fixedwidth",
    version,
    about = "Fixed-width integer/float codec and byte-buffer operations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode one number and print the bytes as hex.
    Encode {
        /// Operation name, e.g. `encode_i32_big_endian`.
        op: String,
        /// Integer or float to encode.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a hex buffer and print the number.
    Decode {
        /// Operation name, e.g. `decode_u16_little_endian`.
        op: String,
        /// Hex bytes, with or without a `0x` prefix.
        hex: String,
    },
    /// Call any registered operation.
    ///
    /// Arguments are read as integers, floats, `true`/`false`, or `0x`-prefixed
    /// hex buffers.
    Call {
        op: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List registered operations.
    Ops,
    /// Time encode/decode round-trips for every layout.
    Bench {
        #[arg(long, default_value_t = 100_000)]
        iterations: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode { op, value } => {
            let value = parse_number(&value).with_context(|| format!("parse value {value:?}"))?;
            match dispatch(&op, &[value])? {
                Value::Bytes(buf) => println!("{}", to_hex(buf.as_bytes())),
                other => println!("{other}"),
            }
        }
        Command::Decode { op, hex } => {
            let bytes = from_hex(&hex).with_context(|| format!("parse hex {hex:?}"))?;
            println!("{}", dispatch(&op, &[Value::from(Buffer::from(bytes))])?);
        }
        Command::Call { op, args } => {
            let args = args
                .iter()
                .map(|arg| parse_value(arg).with_context(|| format!("parse argument {arg:?}")))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", dispatch(&op, &args)?);
        }
        Command::Ops => {
            for op in default_registry().operations() {
                let params: Vec<String> = op.params().iter().map(|p| p.to_string()).collect();
                println!("{:<32} ({})", op.name(), params.join(", "));
            }
        }
        Command::Bench { iterations } => bench(iterations)?,
    }
    Ok(())
}

/// Runs a registry call, turning a set error slot into a failure.
fn dispatch(op: &str, args: &[Value]) -> Result<Value> {
    let (value, error) = default_registry().call_pair(op, args);
    if let Some(e) = error {
        return Err(e).with_context(|| format!("call {op}"));
    }
    Ok(value)
}

fn parse_number(s: &str) -> Result<Value> {
    if let Ok(v) = Integer::from_str(s) {
        return Ok(Value::Int(v));
    }
    match s.parse::<f64>() {
        Ok(v) => Ok(Value::Float(v)),
        Err(_) => bail!("not a number"),
    }
}

fn parse_value(s: &str) -> Result<Value> {
    match s {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if s.starts_with("0x") || s.starts_with("0X") {
        let bytes = from_hex(s)?;
        return Ok(Value::from(Buffer::from(bytes)));
    }
    parse_number(s)
}

fn bench(iterations: u32) -> Result<()> {
    if iterations == 0 {
        bail!("iterations must be positive");
    }
    info!(iterations, "starting benchmark");
    println!("{:<6} {:<14} {:>10}", "type", "order", "ns/op");

    for ty in IntType::ALL {
        let value = ty.max_value();
        for endian in Endian::ALL {
            let start = Instant::now();
            for _ in 0..iterations {
                let buf = encode_int(black_box(&value), ty, endian)?;
                black_box(decode_int(buf.as_bytes(), ty, endian)?);
            }
            report(ty.name(), endian, start, iterations);
        }
    }

    for width in FloatWidth::ALL {
        for endian in Endian::ALL {
            let start = Instant::now();
            for _ in 0..iterations {
                let buf = encode_float(black_box(-1.5), width, endian);
                black_box(decode_float(buf.as_bytes(), width, endian)?);
            }
            report(width.name(), endian, start, iterations);
        }
    }
    Ok(())
}

fn report(name: &str, endian: Endian, start: Instant, iterations: u32) {
    let per_op = start.elapsed().as_nanos() / u128::from(iterations);
    println!("{:<6} {:<14} {:>10}", name, endian.to_string(), per_op);
}
