// src/types/source.rs
//
// The open input surface for classification: any type shape a caller might
// hand us, of which only scalars are classifiable. Pointers, references,
// arrays, and aggregates are rejected here, before the rule engine runs.

use std::fmt;

use crate::errors::DescribeError;
use crate::types::ScalarType;

/// A type as seen at an API boundary, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    Scalar(ScalarType),
    Pointer(Box<SourceType>),
    Reference(Box<SourceType>),
    FixedArray { element: Box<SourceType>, size: u64 },
    /// A class, record, or other aggregate, named for diagnostics.
    Aggregate(String),
    Function,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Scalar(s) => write!(f, "{s}"),
            SourceType::Pointer(inner) => write!(f, "*{inner}"),
            SourceType::Reference(inner) => write!(f, "&{inner}"),
            SourceType::FixedArray { element, size } => write!(f, "[{element}; {size}]"),
            SourceType::Aggregate(name) => write!(f, "{name}"),
            SourceType::Function => write!(f, "fn"),
        }
    }
}

/// Map a source type to its scalar descriptor.
///
/// Returns `DescribeError::NotClassifiable` for anything outside the closed
/// scalar set. Callers must handle this before invoking `classify`; it is
/// never silently downgraded to a verdict.
pub fn describe(ty: &SourceType) -> Result<ScalarType, DescribeError> {
    match ty {
        SourceType::Scalar(scalar) => Ok(*scalar),
        other => Err(DescribeError::NotClassifiable {
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IntType;

    #[test]
    fn test_describe_scalar() {
        let ty = SourceType::Scalar(ScalarType::I32);
        assert_eq!(describe(&ty), Ok(ScalarType::I32));

        let e = SourceType::Scalar(ScalarType::enumeration(IntType::unsigned(16)));
        assert_eq!(
            describe(&e),
            Ok(ScalarType::enumeration(IntType::unsigned(16)))
        );
    }

    #[test]
    fn test_describe_rejects_non_scalars() {
        let ptr = SourceType::Pointer(Box::new(SourceType::Scalar(ScalarType::I32)));
        assert!(matches!(
            describe(&ptr),
            Err(DescribeError::NotClassifiable { .. })
        ));

        let arr = SourceType::FixedArray {
            element: Box::new(SourceType::Scalar(ScalarType::U8)),
            size: 4,
        };
        assert!(describe(&arr).is_err());

        let agg = SourceType::Aggregate("Point".into());
        let err = describe(&agg).unwrap_err();
        assert_eq!(
            err,
            DescribeError::NotClassifiable {
                found: "Point".into()
            }
        );

        assert!(describe(&SourceType::Function).is_err());
        assert!(
            describe(&SourceType::Reference(Box::new(SourceType::Scalar(
                ScalarType::F64
            ))))
            .is_err()
        );
    }
}
