use std::thread;

use fixedwidth::dispatch::{call, default_registry, Operation, Registry, Value, ValueKind};
use fixedwidth::limits::MAX_BUFFER_LEN;
use fixedwidth::{
    Buffer, BufferError, CallError, DecodeError, EncodeError, ErrorCode, IntType, Integer,
};

fn int(v: i64) -> Value {
    Value::from(v)
}

fn bytes(b: &[u8]) -> Value {
    Value::from(Buffer::from(b))
}

fn int_op_names(ty: IntType) -> Vec<(String, String)> {
    if ty.byte_len() == 1 {
        return vec![(format!("encode_{}", ty), format!("decode_{}", ty))];
    }
    ["little", "big"]
        .iter()
        .map(|e| {
            (
                format!("encode_{}_{}_endian", ty, e),
                format!("decode_{}_{}_endian", ty, e),
            )
        })
        .collect()
}

#[test]
fn every_int_layout_is_registered() {
    let registry = default_registry();
    for ty in IntType::ALL {
        for (encode, decode) in int_op_names(ty) {
            let op = registry.get(&encode).unwrap_or_else(|| panic!("missing {encode}"));
            assert_eq!(op.params(), &[ValueKind::Int]);
            let op = registry.get(&decode).unwrap_or_else(|| panic!("missing {decode}"));
            assert_eq!(op.params(), &[ValueKind::Bytes]);
        }
    }
}

#[test]
fn bounds_roundtrip_and_one_past_fails() {
    for ty in IntType::ALL {
        for (encode, decode) in int_op_names(ty) {
            for bound in [ty.min_value(), ty.max_value()] {
                let encoded = call(&encode, &[Value::from(bound.clone())]).unwrap();
                assert_eq!(encoded.as_bytes().unwrap().len(), ty.byte_len());
                assert_eq!(call(&decode, &[encoded]).unwrap(), Value::from(bound));
            }

            let above = ty.max_value() + Integer::from(1);
            let below = ty.min_value() - Integer::from(1);
            for value in [above, below] {
                let err = call(&encode, &[Value::from(value)]).unwrap_err();
                assert_eq!(err.code(), ErrorCode::Range, "{encode}");
            }
        }
    }
}

#[test]
fn decode_requires_exact_length() {
    for ty in IntType::ALL {
        for (_, decode) in int_op_names(ty) {
            for len in [0, ty.byte_len() - 1, ty.byte_len() + 1] {
                let err = call(&decode, &[bytes(&vec![0u8; len])]).unwrap_err();
                assert_eq!(err.code(), ErrorCode::Length, "{decode} with {len} bytes");
            }
        }
    }
}

#[test]
fn arity_checked_before_type_and_range() {
    // too many arguments, one of which is the wrong kind and out of range
    let err = call("encode_u8", &[bytes(b"x"), int(999)]).unwrap_err();
    assert!(matches!(
        err,
        CallError::Arity {
            expected: 1,
            actual: 2,
            ..
        }
    ));

    let err = call("encode_u8", &[bytes(b"x")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Type);

    let err = call("decode_u8", &[int(1)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Type);

    let err = call("concat", &[bytes(b"a")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Arity);
}

#[test]
fn pair_results_hold_exactly_one_side() {
    let registry = default_registry();

    let (value, error) = registry.call_pair("encode_i16_little_endian", &[int(-2)]);
    assert_eq!(value, bytes(&[0xFE, 0xFF]));
    assert!(error.is_none());

    let (value, error) = registry.call_pair("encode_i16_little_endian", &[int(40_000)]);
    assert!(value.is_nil());
    assert_eq!(error.map(|e| e.code()), Some(ErrorCode::Range));

    let (value, error) = registry.call_pair("no_such_op", &[]);
    assert!(value.is_nil());
    assert_eq!(error.map(|e| e.code()), Some(ErrorCode::UnknownOperation));
}

#[test]
fn long_spellings_resolve() {
    let short = call("encode_u32_big_endian", &[int(0x0102_0304)]).unwrap();
    let long = call("encode_u32_to_big_endian", &[int(0x0102_0304)]).unwrap();
    assert_eq!(short, long);
    assert_eq!(short, bytes(&[1, 2, 3, 4]));

    let decoded = call("decode_u32_from_big_endian", &[long]).unwrap();
    assert_eq!(decoded, int(0x0102_0304));
}

#[test]
fn float_ops_accept_ints_and_preserve_bits() {
    let encoded = call("encode_f64_big_endian", &[int(1)]).unwrap();
    assert_eq!(encoded, bytes(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0]));

    let encoded = call("encode_f32_little_endian", &[Value::from(-0.0)]).unwrap();
    assert_eq!(encoded, bytes(&[0, 0, 0, 0x80]));

    let nan = bytes(&[0x01, 0x00, 0xF8, 0x7F]);
    let decoded = call("decode_f32_little_endian", &[nan]).unwrap();
    assert!(decoded.as_float().unwrap().is_nan());

    let err = call("encode_f64_little_endian", &[bytes(b"1")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Type);
}

#[test]
fn buffer_search_ops() {
    let haystack = bytes(b"abcabcab");
    assert_eq!(call("index", &[haystack.clone(), bytes(b"ca")]).unwrap(), int(2));
    assert_eq!(call("last_index", &[haystack.clone(), bytes(b"ab")]).unwrap(), int(6));
    assert_eq!(call("index", &[haystack.clone(), bytes(b"zz")]).unwrap(), int(-1));
    assert_eq!(call("count", &[haystack.clone(), bytes(b"ab")]).unwrap(), int(3));
    assert_eq!(call("count", &[bytes(b"aaaa"), bytes(b"aa")]).unwrap(), int(2));
    assert_eq!(call("count", &[bytes(b"abc"), bytes(b"")]).unwrap(), int(4));
    assert_eq!(
        call("starts_with", &[haystack.clone(), bytes(b"abc")]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        call("ends_with", &[haystack, bytes(b"bc")]).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn buffer_slice_clamps() {
    let buf = bytes(b"hello");
    assert_eq!(call("slice", &[buf.clone(), int(1), int(3)]).unwrap(), bytes(b"el"));
    assert_eq!(call("slice", &[buf.clone(), int(-3), int(100)]).unwrap(), bytes(b"llo"));
    assert_eq!(call("slice", &[buf.clone(), int(4), int(2)]).unwrap(), bytes(b""));
    let huge = Value::from(Integer::from(u128::MAX));
    assert_eq!(call("slice", &[buf, int(0), huge]).unwrap(), bytes(b"hello"));
}

#[test]
fn buffer_bitwise_ops() {
    let a = bytes(&[0b1100, 0xFF]);
    let b = bytes(&[0b1010, 0x0F]);
    assert_eq!(call("and", &[a.clone(), b.clone()]).unwrap(), bytes(&[0b1000, 0x0F]));
    assert_eq!(call("or", &[a.clone(), b.clone()]).unwrap(), bytes(&[0b1110, 0xFF]));
    assert_eq!(call("xor", &[a.clone(), b]).unwrap(), bytes(&[0b0110, 0xF0]));
    assert_eq!(call("not", &[a.clone()]).unwrap(), bytes(&[0xF3, 0x00]));

    let err = call("xor", &[a, bytes(&[1])]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Length);
}

#[test]
fn buffer_padding_trimming_and_filling() {
    let buf = bytes(&[7, 8]);
    assert_eq!(
        call("pad_left", &[buf.clone(), int(4), int(0)]).unwrap(),
        bytes(&[0, 0, 7, 8])
    );
    assert_eq!(
        call("pad_right", &[buf.clone(), int(3), int(0xEE)]).unwrap(),
        bytes(&[7, 8, 0xEE])
    );
    assert_eq!(call("pad_right", &[buf.clone(), int(1), int(0)]).unwrap(), buf);

    let err = call("pad_left", &[buf.clone(), int(4), int(256)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Range);
    let err = call("pad_left", &[buf.clone(), int(-1), int(0)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Range);

    let padded = bytes(b"\0\0data\0");
    assert_eq!(call("trim", &[padded.clone(), bytes(b"\0")]).unwrap(), bytes(b"data"));
    assert_eq!(call("trim_left", &[padded.clone(), bytes(b"\0")]).unwrap(), bytes(b"data\0"));
    assert_eq!(call("trim_right", &[padded, bytes(b"\0")]).unwrap(), bytes(b"\0\0data"));

    assert_eq!(call("fill", &[buf.clone(), int(0xAA)]).unwrap(), bytes(&[0xAA, 0xAA]));
    assert_eq!(call("zero", &[buf]).unwrap(), bytes(&[0, 0]));
}

#[test]
fn operations_are_sorted_and_unique() {
    let ops = default_registry().operations();
    let names: Vec<&str> = ops.iter().map(|op| op.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), default_registry().len());
}

#[test]
fn oversized_results_fail_without_allocating() {
    let cases = [
        ("repeat", vec![bytes(&[1, 2]), int(i64::MAX)]),
        ("pad_left", vec![bytes(&[1]), int(1 << 40), int(0)]),
        ("pad_right", vec![bytes(&[1]), int(1 << 40), int(0)]),
        ("pad_left", vec![bytes(&[1]), Value::from(Integer::from(u64::MAX)), int(0)]),
    ];
    for (op, args) in cases {
        let (value, error) = default_registry().call_pair(op, &args);
        assert!(value.is_nil(), "{op}");
        assert_eq!(error.map(|e| e.code()), Some(ErrorCode::LimitExceeded), "{op}");
    }

    let err = call("repeat", &[bytes(&[7]), int(MAX_BUFFER_LEN as i64 + 1)]).unwrap_err();
    assert!(matches!(
        err,
        CallError::Buffer(BufferError::LengthExceedsLimit { op: "repeat", .. })
    ));

    // an empty buffer repeats to empty regardless of count
    assert_eq!(call("repeat", &[bytes(b""), int(i64::MAX)]).unwrap(), bytes(b""));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<Buffer>();
    assert_send_sync::<Value>();
    assert_send_sync::<Registry>();
    assert_send_sync::<Operation>();
    assert_send_sync::<EncodeError>();
    assert_send_sync::<DecodeError>();
    assert_send_sync::<BufferError>();
    assert_send_sync::<CallError>();
}

#[test]
fn default_registry_shared_across_threads() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                scope.spawn(move || {
                    let registry = default_registry();
                    for v in (i * 1000)..(i * 1000 + 200) {
                        let encoded = registry.call("encode_i64_big_endian", &[int(-v)]).unwrap();
                        let decoded = registry.call("decode_i64_big_endian", &[encoded]).unwrap();
                        assert_eq!(decoded, int(-v));
                    }
                    registry as *const Registry as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    });
}
