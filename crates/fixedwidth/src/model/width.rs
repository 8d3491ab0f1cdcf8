//! Width descriptors for the fixed-width codec.
//!
//! An [`IntType`] pairs a bit width with a signedness and determines three
//! things: the legal numeric range for encoding, the exact buffer length, and
//! the two's-complement transform applied. [`FloatWidth`] does the same for
//! IEEE-754 binary32/binary64, whose range is every bit pattern.

use std::fmt;

use malachite::Integer;

/// Returns `2^bits` as an arbitrary-precision integer.
pub(crate) fn power_of_two(bits: u32) -> Integer {
    Integer::from(1u8) << u64::from(bits)
}

/// Whether a width is interpreted as two's complement or plain magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least-significant byte at index 0.
    Little,
    /// Most-significant byte at index 0.
    Big,
}

impl Endian {
    pub const ALL: [Endian; 2] = [Endian::Little, Endian::Big];

    /// Returns the name used in operation names ("little" or "big").
    pub fn name(&self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-endian", self.name())
    }
}

/// Supported integer bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl IntWidth {
    pub const ALL: [IntWidth; 5] = [
        IntWidth::W8,
        IntWidth::W16,
        IntWidth::W32,
        IntWidth::W64,
        IntWidth::W128,
    ];

    /// Returns the number of bits.
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
            IntWidth::W128 => 128,
        }
    }

    /// Returns the encoded length in bytes.
    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Looks up a width by bit count.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.bits() == bits)
    }
}

/// Width descriptor: a bit width paired with a signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub width: IntWidth,
    pub signedness: Signedness,
}

impl IntType {
    pub const I8: IntType = IntType::new(IntWidth::W8, Signedness::Signed);
    pub const I16: IntType = IntType::new(IntWidth::W16, Signedness::Signed);
    pub const I32: IntType = IntType::new(IntWidth::W32, Signedness::Signed);
    pub const I64: IntType = IntType::new(IntWidth::W64, Signedness::Signed);
    pub const I128: IntType = IntType::new(IntWidth::W128, Signedness::Signed);
    pub const U8: IntType = IntType::new(IntWidth::W8, Signedness::Unsigned);
    pub const U16: IntType = IntType::new(IntWidth::W16, Signedness::Unsigned);
    pub const U32: IntType = IntType::new(IntWidth::W32, Signedness::Unsigned);
    pub const U64: IntType = IntType::new(IntWidth::W64, Signedness::Unsigned);
    pub const U128: IntType = IntType::new(IntWidth::W128, Signedness::Unsigned);

    pub const ALL: [IntType; 10] = [
        IntType::I8,
        IntType::I16,
        IntType::I32,
        IntType::I64,
        IntType::I128,
        IntType::U8,
        IntType::U16,
        IntType::U32,
        IntType::U64,
        IntType::U128,
    ];

    pub const fn new(width: IntWidth, signedness: Signedness) -> Self {
        Self { width, signedness }
    }

    pub fn bits(&self) -> u32 {
        self.width.bits()
    }

    pub fn byte_len(&self) -> usize {
        self.width.byte_len()
    }

    pub fn is_signed(&self) -> bool {
        self.signedness == Signedness::Signed
    }

    /// Returns the short type name, e.g. "i32" or "u128".
    pub fn name(&self) -> &'static str {
        match (self.signedness, self.width) {
            (Signedness::Signed, IntWidth::W8) => "i8",
            (Signedness::Signed, IntWidth::W16) => "i16",
            (Signedness::Signed, IntWidth::W32) => "i32",
            (Signedness::Signed, IntWidth::W64) => "i64",
            (Signedness::Signed, IntWidth::W128) => "i128",
            (Signedness::Unsigned, IntWidth::W8) => "u8",
            (Signedness::Unsigned, IntWidth::W16) => "u16",
            (Signedness::Unsigned, IntWidth::W32) => "u32",
            (Signedness::Unsigned, IntWidth::W64) => "u64",
            (Signedness::Unsigned, IntWidth::W128) => "u128",
        }
    }

    /// Parses a short type name ("i8" .. "u128").
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Smallest encodable value: `0` or `-2^(W-1)`.
    pub fn min_value(&self) -> Integer {
        match self.signedness {
            Signedness::Signed => -power_of_two(self.bits() - 1),
            Signedness::Unsigned => Integer::from(0u8),
        }
    }

    /// Largest encodable value: `2^W - 1` or `2^(W-1) - 1`.
    pub fn max_value(&self) -> Integer {
        match self.signedness {
            Signedness::Signed => power_of_two(self.bits() - 1) - Integer::from(1u8),
            Signedness::Unsigned => power_of_two(self.bits()) - Integer::from(1u8),
        }
    }

    /// Returns true if `value` lies inside the legal range.
    pub fn contains(&self, value: &Integer) -> bool {
        *value >= self.min_value() && *value <= self.max_value()
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// IEEE-754 float widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// binary32
    F32,
    /// binary64
    F64,
}

impl FloatWidth {
    pub const ALL: [FloatWidth; 2] = [FloatWidth::F32, FloatWidth::F64];

    pub fn bits(self) -> u32 {
        match self {
            FloatWidth::F32 => 32,
            FloatWidth::F64 => 64,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    pub fn name(self) -> &'static str {
        match self {
            FloatWidth::F32 => "f32",
            FloatWidth::F64 => "f64",
        }
    }
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_match_native_types() {
        assert_eq!(IntType::I8.min_value(), Integer::from(i8::MIN));
        assert_eq!(IntType::I8.max_value(), Integer::from(i8::MAX));
        assert_eq!(IntType::U16.max_value(), Integer::from(u16::MAX));
        assert_eq!(IntType::I64.min_value(), Integer::from(i64::MIN));
        assert_eq!(IntType::U64.max_value(), Integer::from(u64::MAX));
        assert_eq!(IntType::I128.min_value(), Integer::from(i128::MIN));
        assert_eq!(IntType::I128.max_value(), Integer::from(i128::MAX));
        assert_eq!(IntType::U128.max_value(), Integer::from(u128::MAX));
        assert_eq!(IntType::U128.min_value(), Integer::from(0));
    }

    #[test]
    fn test_contains_boundaries() {
        assert!(IntType::I8.contains(&Integer::from(127)));
        assert!(!IntType::I8.contains(&Integer::from(128)));
        assert!(IntType::I8.contains(&Integer::from(-128)));
        assert!(!IntType::I8.contains(&Integer::from(-129)));
        assert!(!IntType::U8.contains(&Integer::from(-1)));
        assert!(!IntType::U8.contains(&Integer::from(256)));
    }

    #[test]
    fn test_names_roundtrip() {
        for ty in IntType::ALL {
            assert_eq!(IntType::from_name(ty.name()), Some(ty));
            assert_eq!(ty.byte_len() * 8, ty.bits() as usize);
        }
        assert_eq!(IntType::from_name("i7"), None);
        assert_eq!(IntWidth::from_bits(64), Some(IntWidth::W64));
        assert_eq!(IntWidth::from_bits(24), None);
    }
}
