//! Name-keyed registry of typed operations.
//!
//! The registry is the only place operations are looked up by string. Each
//! [`Operation`] declares its parameter kinds; a call checks the argument
//! count first, then each argument's kind, and only then runs the typed
//! function. Range and length errors therefore never mask arity or type
//! errors.
//!
//! # Example
//! ```
//! use fixedwidth::dispatch::{default_registry, Value};
//! use fixedwidth::Buffer;
//!
//! let registry = default_registry();
//! let out = registry
//!     .call("encode_u16_big_endian", &[Value::from(258i64)])
//!     .unwrap();
//! assert_eq!(out, Value::Bytes(Buffer::from([0x01u8, 0x02])));
//!
//! let (value, error) = registry.call_pair("encode_u8", &[Value::from(256i64)]);
//! assert!(value.is_nil());
//! assert!(error.is_some());
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use malachite::Integer;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::codec::named;
use crate::dispatch::value::{Value, ValueKind};
use crate::error::CallError;
use crate::model::{Buffer, IntType};
use crate::validate::validate_range;

type Handler = dyn Fn(&Args<'_>) -> Result<Value, CallError> + Send + Sync;

/// Checked arguments handed to an operation's handler.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    op: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, index: usize) -> Result<&'a Value, CallError> {
        self.values.get(index).ok_or(CallError::Arity {
            op: self.op,
            expected: index + 1,
            actual: self.values.len(),
        })
    }

    fn type_error(&self, index: usize, expected: ValueKind, found: &Value) -> CallError {
        CallError::Type {
            op: self.op,
            position: index + 1,
            expected,
            found: found.kind(),
        }
    }

    /// Argument `index` as an integer.
    pub fn int(&self, index: usize) -> Result<&'a Integer, CallError> {
        let value = self.get(index)?;
        value
            .as_int()
            .ok_or_else(|| self.type_error(index, ValueKind::Int, value))
    }

    /// Argument `index` as a float; integers convert to the nearest float.
    pub fn float(&self, index: usize) -> Result<f64, CallError> {
        match self.get(index)? {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(f64::rounding_from(v, RoundingMode::Nearest).0),
            other => Err(self.type_error(index, ValueKind::Number, other)),
        }
    }

    /// Argument `index` as a buffer.
    pub fn bytes(&self, index: usize) -> Result<&'a Buffer, CallError> {
        let value = self.get(index)?;
        value
            .as_bytes()
            .ok_or_else(|| self.type_error(index, ValueKind::Bytes, value))
    }

    /// Argument `index` as a buffer index; out-of-range integers saturate.
    pub fn position(&self, index: usize) -> Result<i64, CallError> {
        let v = self.int(index)?;
        Ok(i64::try_from(v).unwrap_or(if *v < 0 { i64::MIN } else { i64::MAX }))
    }

    /// Argument `index` as a byte value in `0..=255`.
    pub fn byte(&self, index: usize) -> Result<u8, CallError> {
        let v = self.int(index)?;
        validate_range(v, IntType::U8)?;
        Ok(u64::try_from(v).unwrap_or(0) as u8)
    }

    /// Argument `index` as a non-negative length.
    pub fn length(&self, index: usize) -> Result<usize, CallError> {
        let v = self.int(index)?;
        validate_range(v, IntType::U64)?;
        let len = u64::try_from(v).unwrap_or(0);
        Ok(usize::try_from(len).unwrap_or(usize::MAX))
    }
}

/// A named operation with a fixed parameter list.
#[derive(Clone)]
pub struct Operation {
    name: &'static str,
    params: &'static [ValueKind],
    handler: Arc<Handler>,
}

impl Operation {
    pub fn new<F>(name: &'static str, params: &'static [ValueKind], handler: F) -> Self
    where
        F: Fn(&Args<'_>) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            name,
            params,
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &'static [ValueKind] {
        self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Checks arity and argument kinds, then runs the handler.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        if args.len() != self.params.len() {
            return Err(CallError::Arity {
                op: self.name,
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if !param.accepts(arg) {
                return Err(CallError::Type {
                    op: self.name,
                    position: index + 1,
                    expected: *param,
                    found: arg.kind(),
                });
            }
        }
        (self.handler)(&Args {
            op: self.name,
            values: args,
        })
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Lookup table from operation name to [`Operation`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    ops: FxHashMap<&'static str, Operation>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every codec and buffer operation.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.extend(codec_operations());
        registry.extend(buffer_operations());
        debug!(operations = registry.len(), "built operation registry");
        registry
    }

    /// Adds an operation, returning any operation it replaced.
    pub fn register(&mut self, op: Operation) -> Option<Operation> {
        self.ops.insert(op.name, op)
    }

    pub fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        for op in iter {
            self.register(op);
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Looks up an operation by name.
    ///
    /// `encode_*_to_<endian>_endian` and `decode_*_from_<endian>_endian`
    /// resolve to the same operations as their short spellings.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.get(canonical_name(name).as_ref())
    }

    /// Returns all operations sorted by name.
    pub fn operations(&self) -> Vec<&Operation> {
        let mut ops: Vec<&Operation> = self.ops.values().collect();
        ops.sort_by_key(|op| op.name);
        ops
    }

    /// Calls the operation registered under `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let op = self.get(name).ok_or_else(|| CallError::UnknownOperation {
            name: name.to_string(),
        })?;
        let result = op.call(args);
        match &result {
            Ok(value) => trace!(op = op.name, result = %value, "call succeeded"),
            Err(e) => debug!(op = op.name, code = e.code().code(), error = %e, "call failed"),
        }
        result
    }

    /// Calls `name` and returns a (value, error) pair.
    ///
    /// On failure the value slot holds [`Value::Nil`].
    pub fn call_pair(&self, name: &str, args: &[Value]) -> (Value, Option<CallError>) {
        match self.call(name, args) {
            Ok(value) => (value, None),
            Err(e) => (Value::Nil, Some(e)),
        }
    }
}

fn canonical_name(name: &str) -> Cow<'_, str> {
    if name.starts_with("encode_") && name.contains("_to_") {
        Cow::Owned(name.replacen("_to_", "_", 1))
    } else if name.starts_with("decode_") && name.contains("_from_") {
        Cow::Owned(name.replacen("_from_", "_", 1))
    } else {
        Cow::Borrowed(name)
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::with_defaults();
}

/// Returns the process-wide registry of built-in operations.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Calls a built-in operation by name.
pub fn call(name: &str, args: &[Value]) -> Result<Value, CallError> {
    default_registry().call(name, args)
}

// =============================================================================
// BUILT-IN OPERATIONS
// =============================================================================

const INT: &[ValueKind] = &[ValueKind::Int];
const NUMBER: &[ValueKind] = &[ValueKind::Number];
const BYTES: &[ValueKind] = &[ValueKind::Bytes];
const BYTES_BYTES: &[ValueKind] = &[ValueKind::Bytes, ValueKind::Bytes];
const BYTES_INT: &[ValueKind] = &[ValueKind::Bytes, ValueKind::Int];
const BYTES_INT_INT: &[ValueKind] = &[ValueKind::Bytes, ValueKind::Int, ValueKind::Int];

macro_rules! int_codec_ops {
    ($($encode:ident, $decode:ident;)*) => {
        vec![$(
            Operation::new(stringify!($encode), INT, |args| {
                Ok(Value::Bytes(named::$encode(args.int(0)?)?))
            }),
            Operation::new(stringify!($decode), BYTES, |args| {
                Ok(Value::Int(named::$decode(args.bytes(0)?)?))
            }),
        )*]
    };
}

macro_rules! float_codec_ops {
    ($($encode:ident, $decode:ident => $float:ty;)*) => {
        vec![$(
            Operation::new(stringify!($encode), NUMBER, |args| {
                Ok(Value::Bytes(named::$encode(args.float(0)? as $float)))
            }),
            Operation::new(stringify!($decode), BYTES, |args| {
                Ok(Value::Float(f64::from(named::$decode(args.bytes(0)?)?)))
            }),
        )*]
    };
}

fn codec_operations() -> Vec<Operation> {
    let mut ops = int_codec_ops! {
        encode_i8, decode_i8;
        encode_u8, decode_u8;
        encode_i16_little_endian, decode_i16_little_endian;
        encode_i16_big_endian, decode_i16_big_endian;
        encode_u16_little_endian, decode_u16_little_endian;
        encode_u16_big_endian, decode_u16_big_endian;
        encode_i32_little_endian, decode_i32_little_endian;
        encode_i32_big_endian, decode_i32_big_endian;
        encode_u32_little_endian, decode_u32_little_endian;
        encode_u32_big_endian, decode_u32_big_endian;
        encode_i64_little_endian, decode_i64_little_endian;
        encode_i64_big_endian, decode_i64_big_endian;
        encode_u64_little_endian, decode_u64_little_endian;
        encode_u64_big_endian, decode_u64_big_endian;
        encode_i128_little_endian, decode_i128_little_endian;
        encode_i128_big_endian, decode_i128_big_endian;
        encode_u128_little_endian, decode_u128_little_endian;
        encode_u128_big_endian, decode_u128_big_endian;
    };
    ops.extend(float_codec_ops! {
        encode_f32_little_endian, decode_f32_little_endian => f32;
        encode_f32_big_endian, decode_f32_big_endian => f32;
        encode_f64_little_endian, decode_f64_little_endian => f64;
        encode_f64_big_endian, decode_f64_big_endian => f64;
    });
    ops
}

/// Converts an optional position into an int, `-1` meaning not found.
fn position_value(position: Option<usize>) -> Value {
    Value::Int(position.map_or(Integer::from(-1), |p| Integer::from(p as u64)))
}

fn buffer_operations() -> Vec<Operation> {
    vec![
        Operation::new("len", BYTES, |args| {
            Ok(Value::Int(Integer::from(args.bytes(0)?.len() as u64)))
        }),
        Operation::new("slice", BYTES_INT_INT, |args| {
            let buf = args.bytes(0)?;
            Ok(Value::Bytes(buf.slice(args.position(1)?, args.position(2)?)))
        }),
        Operation::new("concat", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.concat(args.bytes(1)?)))
        }),
        Operation::new("index", BYTES_BYTES, |args| {
            Ok(position_value(args.bytes(0)?.index(args.bytes(1)?)))
        }),
        Operation::new("last_index", BYTES_BYTES, |args| {
            Ok(position_value(args.bytes(0)?.last_index(args.bytes(1)?)))
        }),
        Operation::new("count", BYTES_BYTES, |args| {
            let count = args.bytes(0)?.count(args.bytes(1)?);
            Ok(Value::Int(Integer::from(count as u64)))
        }),
        Operation::new("contains", BYTES_BYTES, |args| {
            Ok(Value::Bool(args.bytes(0)?.contains(args.bytes(1)?)))
        }),
        Operation::new("starts_with", BYTES_BYTES, |args| {
            Ok(Value::Bool(args.bytes(0)?.starts_with(args.bytes(1)?)))
        }),
        Operation::new("ends_with", BYTES_BYTES, |args| {
            Ok(Value::Bool(args.bytes(0)?.ends_with(args.bytes(1)?)))
        }),
        Operation::new("compare", BYTES_BYTES, |args| {
            let ordering = match args.bytes(0)?.compare(args.bytes(1)?) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            Ok(Value::Int(Integer::from(ordering)))
        }),
        Operation::new("and", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.and(args.bytes(1)?)?))
        }),
        Operation::new("or", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.or(args.bytes(1)?)?))
        }),
        Operation::new("xor", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.xor(args.bytes(1)?)?))
        }),
        Operation::new("not", BYTES, |args| Ok(Value::Bytes(args.bytes(0)?.not()))),
        Operation::new("pad_left", BYTES_INT_INT, |args| {
            let buf = args.bytes(0)?;
            Ok(Value::Bytes(buf.pad_left(args.length(1)?, args.byte(2)?)?))
        }),
        Operation::new("pad_right", BYTES_INT_INT, |args| {
            let buf = args.bytes(0)?;
            Ok(Value::Bytes(buf.pad_right(args.length(1)?, args.byte(2)?)?))
        }),
        Operation::new("trim", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.trim(args.bytes(1)?)))
        }),
        Operation::new("trim_left", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.trim_left(args.bytes(1)?)))
        }),
        Operation::new("trim_right", BYTES_BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.trim_right(args.bytes(1)?)))
        }),
        Operation::new("fill", BYTES_INT, |args| {
            Ok(Value::Bytes(args.bytes(0)?.fill(args.byte(1)?)))
        }),
        Operation::new("zero", BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.clone().zero()))
        }),
        Operation::new("repeat", BYTES_INT, |args| {
            Ok(Value::Bytes(args.bytes(0)?.repeat(args.length(1)?)?))
        }),
        Operation::new("reverse", BYTES, |args| {
            Ok(Value::Bytes(args.bytes(0)?.reverse()))
        }),
    ]
}
