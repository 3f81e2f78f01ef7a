// src/types/scalar.rs
//
// Scalar type descriptors consolidating all classifiable type variants.
// Classification operates on these descriptors instead of concrete types,
// so the verdict is portable across toolchains.

use std::fmt;

/// Integer descriptor: signedness plus an arbitrary bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub signed: bool,
    pub bits: u16,
}

impl IntType {
    pub const fn signed(bits: u16) -> Self {
        IntType { signed: true, bits }
    }

    pub const fn unsigned(bits: u16) -> Self {
        IntType {
            signed: false,
            bits,
        }
    }
}

/// Floating-point descriptor. `bits` is the precision rank ordering key:
/// a float with more bits represents a superset of a narrower float's
/// values (32 < 64 < 80 < 128).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatType {
    pub bits: u16,
}

/// Enumeration descriptor carrying its underlying integer type.
/// Range rules never look at the enumeration itself; they decay it
/// to `underlying` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumType {
    pub underlying: IntType,
}

/// A classifiable scalar type.
/// Consolidates bool, signed/unsigned integers, floats, and enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    Int(IntType),
    Float(FloatType),
    Enum(EnumType),
}

impl ScalarType {
    // ========================================================================
    // Reserved descriptors for the common concrete widths
    // ========================================================================

    // Signed integers
    pub const I8: ScalarType = ScalarType::Int(IntType::signed(8));
    pub const I16: ScalarType = ScalarType::Int(IntType::signed(16));
    pub const I32: ScalarType = ScalarType::Int(IntType::signed(32));
    pub const I64: ScalarType = ScalarType::Int(IntType::signed(64));
    pub const I128: ScalarType = ScalarType::Int(IntType::signed(128));

    // Unsigned integers
    pub const U8: ScalarType = ScalarType::Int(IntType::unsigned(8));
    pub const U16: ScalarType = ScalarType::Int(IntType::unsigned(16));
    pub const U32: ScalarType = ScalarType::Int(IntType::unsigned(32));
    pub const U64: ScalarType = ScalarType::Int(IntType::unsigned(64));

    // Floating point (F80 covers extended-precision "long double" layouts)
    pub const F32: ScalarType = ScalarType::Float(FloatType { bits: 32 });
    pub const F64: ScalarType = ScalarType::Float(FloatType { bits: 64 });
    pub const F80: ScalarType = ScalarType::Float(FloatType { bits: 80 });
    pub const F128: ScalarType = ScalarType::Float(FloatType { bits: 128 });

    pub const BOOL: ScalarType = ScalarType::Bool;

    /// Build an enumeration descriptor over the given underlying integer.
    pub const fn enumeration(underlying: IntType) -> Self {
        ScalarType::Enum(EnumType { underlying })
    }

    /// Check if this type is an integer (signed or unsigned).
    pub const fn is_integer(self) -> bool {
        matches!(self, ScalarType::Int(_))
    }

    /// Check if this type is a signed integer.
    pub const fn is_signed_int(self) -> bool {
        matches!(self, ScalarType::Int(IntType { signed: true, .. }))
    }

    /// Check if this type is an unsigned integer.
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, ScalarType::Int(IntType { signed: false, .. }))
    }

    /// Check if this type is a floating point type.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarType::Float(_))
    }

    pub const fn is_bool(self) -> bool {
        matches!(self, ScalarType::Bool)
    }

    pub const fn is_enum(self) -> bool {
        matches!(self, ScalarType::Enum(_))
    }

    /// Get the bit width of this type.
    /// Returns None for Bool (its width never participates in range rules).
    pub const fn bit_width(self) -> Option<u16> {
        match self {
            ScalarType::Int(IntType { bits, .. }) | ScalarType::Float(FloatType { bits }) => {
                Some(bits)
            }
            ScalarType::Enum(EnumType { underlying }) => Some(underlying.bits),
            ScalarType::Bool => None,
        }
    }

    /// The integer type backing an enumeration. None for every other kind.
    pub const fn underlying(self) -> Option<IntType> {
        match self {
            ScalarType::Enum(EnumType { underlying }) => Some(underlying),
            _ => None,
        }
    }

    /// Decay an enumeration to its underlying integer descriptor.
    /// All other kinds are returned unchanged.
    pub const fn decayed(self) -> ScalarType {
        match self {
            ScalarType::Enum(EnumType { underlying }) => ScalarType::Int(underlying),
            other => other,
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.signed { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Bool => write!(f, "bool"),
            ScalarType::Int(int) => write!(f, "{int}"),
            ScalarType::Float(FloatType { bits }) => write!(f, "f{bits}"),
            ScalarType::Enum(EnumType { underlying }) => write!(f, "enum({underlying})"),
        }
    }
}
