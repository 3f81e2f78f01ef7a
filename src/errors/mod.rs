// errors/mod.rs
//! Descriptor errors (E01xx) and conformance failures (E02xx).

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the descriptor model, raised before classification runs.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("type '{found}' is not a classifiable scalar")]
    #[diagnostic(
        code(E0101),
        help(
            "only bool, signed/unsigned integers, floating point, and enumeration types \
             can be classified; pointers, references, arrays, and aggregates are rejected"
        )
    )]
    NotClassifiable { found: String },
}

/// Failures from the conformance suite. These are build-time conditions:
/// production use of `classify` never produces them.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    #[error(
        "conformance mismatch for {from} -> {to}: expected narrowing = {expected}, \
         classifier returned {actual} ({rationale})"
    )]
    #[diagnostic(code(E0201))]
    Mismatch {
        from: String,
        to: String,
        expected: bool,
        actual: bool,
        rationale: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_classifiable_message() {
        let err = DescribeError::NotClassifiable {
            found: "*i32".into(),
        };
        assert_eq!(err.to_string(), "type '*i32' is not a classifiable scalar");
    }

    #[test]
    fn test_mismatch_message_names_both_verdicts() {
        let err = ConformanceError::Mismatch {
            from: "u8".into(),
            to: "i8".into(),
            expected: true,
            actual: false,
            rationale: "RangeSubset".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("u8 -> i8"));
        assert!(msg.contains("expected narrowing = true"));
        assert!(msg.contains("returned false"));
    }
}
