// src/types/concrete.rs
//
// Descriptors for concrete Rust scalar types, so narrowing checks can run
// in const context at an API boundary.

use crate::types::ScalarType;

/// A concrete type with a known scalar descriptor.
///
/// Implemented for the built-in scalars below. A fieldless enum with a known
/// representation can implement it by hand:
///
/// ```
/// use narrowing::{IntType, Scalar, ScalarType};
///
/// #[repr(u16)]
/// enum Opcode { Nop = 0, Halt = 1 }
///
/// impl Scalar for Opcode {
///     const DESCRIPTOR: ScalarType = ScalarType::enumeration(IntType::unsigned(16));
/// }
///
/// assert!(narrowing::is_narrowing::<Opcode, u8>());
/// assert!(!narrowing::is_narrowing::<Opcode, u16>());
/// ```
pub trait Scalar {
    const DESCRIPTOR: ScalarType;
}

macro_rules! impl_scalar {
    ($($ty:ty => $desc:expr),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const DESCRIPTOR: ScalarType = $desc;
            }
        )*
    };
}

impl_scalar! {
    bool => ScalarType::BOOL,
    i8   => ScalarType::I8,
    i16  => ScalarType::I16,
    i32  => ScalarType::I32,
    i64  => ScalarType::I64,
    i128 => ScalarType::I128,
    u8   => ScalarType::U8,
    u16  => ScalarType::U16,
    u32  => ScalarType::U32,
    u64  => ScalarType::U64,
    f32  => ScalarType::F32,
    f64  => ScalarType::F64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptors() {
        assert_eq!(<bool as Scalar>::DESCRIPTOR, ScalarType::BOOL);
        assert_eq!(<i8 as Scalar>::DESCRIPTOR, ScalarType::I8);
        assert_eq!(<u64 as Scalar>::DESCRIPTOR, ScalarType::U64);
        assert_eq!(<i128 as Scalar>::DESCRIPTOR, ScalarType::I128);
        assert_eq!(<f32 as Scalar>::DESCRIPTOR, ScalarType::F32);
        assert_eq!(<f64 as Scalar>::DESCRIPTOR, ScalarType::F64);
    }
}
