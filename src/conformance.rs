// src/conformance.rs
//
// The conformance suite: a fixed table of (from, to, expected-narrowing)
// facts covering every meaningfully distinct pair category, evaluated
// against the classifier as a build gate. Rows that look redundant guard
// against regressions: each historical revision of the rule set got at
// least one of them wrong.

use crate::classify::{ConversionQuery, classify};
use crate::errors::ConformanceError;
use crate::types::{IntType, ScalarType};

const E8: ScalarType = ScalarType::enumeration(IntType::unsigned(8));
const E16: ScalarType = ScalarType::enumeration(IntType::unsigned(16));

/// Every conformance fact: `(from, to, expected_narrowing)`.
pub const CASES: &[(ScalarType, ScalarType, bool)] = &[
    // bool as source and destination
    (ScalarType::BOOL, ScalarType::I32, false),
    (ScalarType::BOOL, ScalarType::I16, false),
    (ScalarType::BOOL, ScalarType::U8, false),
    (ScalarType::BOOL, ScalarType::F32, false),
    (ScalarType::BOOL, ScalarType::F64, false),
    (ScalarType::BOOL, ScalarType::BOOL, false),
    (ScalarType::I32, ScalarType::BOOL, true),
    (ScalarType::I8, ScalarType::BOOL, true),
    (ScalarType::U8, ScalarType::BOOL, true),
    (ScalarType::U16, ScalarType::BOOL, true),
    (ScalarType::F32, ScalarType::BOOL, true),
    (ScalarType::F64, ScalarType::BOOL, true),
    (E8, ScalarType::BOOL, true),
    (E16, ScalarType::BOOL, true),
    // floating point -> integer
    (ScalarType::F32, ScalarType::I32, true),
    (ScalarType::F64, ScalarType::I32, true),
    (ScalarType::F80, ScalarType::I32, true),
    (ScalarType::F32, ScalarType::I8, true),
    (ScalarType::F64, ScalarType::I8, true),
    (ScalarType::F80, ScalarType::I8, true),
    // floating point -> floating point, across three ranks
    (ScalarType::F64, ScalarType::F32, true),
    (ScalarType::F80, ScalarType::F32, true),
    (ScalarType::F80, ScalarType::F64, true),
    (ScalarType::F128, ScalarType::F64, true),
    (ScalarType::F32, ScalarType::F32, false),
    (ScalarType::F64, ScalarType::F64, false),
    (ScalarType::F80, ScalarType::F80, false),
    (ScalarType::F32, ScalarType::F64, false),
    (ScalarType::F32, ScalarType::F80, false),
    (ScalarType::F64, ScalarType::F80, false),
    (ScalarType::F64, ScalarType::F128, false),
    // integer -> floating point
    (ScalarType::I32, ScalarType::F32, true),
    (ScalarType::I32, ScalarType::F64, true),
    (ScalarType::I8, ScalarType::F32, true),
    (ScalarType::I8, ScalarType::F64, true),
    (ScalarType::U8, ScalarType::F32, true),
    (ScalarType::U8, ScalarType::F64, true),
    (ScalarType::U16, ScalarType::F32, true),
    (ScalarType::U16, ScalarType::F64, true),
    // integer -> integer, same signedness
    (ScalarType::U8, ScalarType::U8, false),
    (ScalarType::U8, ScalarType::U16, false),
    (ScalarType::U8, ScalarType::U32, false),
    (ScalarType::U8, ScalarType::U64, false),
    (ScalarType::I8, ScalarType::I8, false),
    (ScalarType::I8, ScalarType::I16, false),
    (ScalarType::I32, ScalarType::I64, false),
    (ScalarType::I64, ScalarType::I128, false),
    (ScalarType::I64, ScalarType::I32, true),
    (ScalarType::I16, ScalarType::I8, true),
    (ScalarType::U32, ScalarType::U16, true),
    // integer -> integer, across signedness
    (ScalarType::U8, ScalarType::I16, false),
    (ScalarType::U8, ScalarType::I32, false),
    (ScalarType::U8, ScalarType::I64, false),
    (ScalarType::U64, ScalarType::I128, false),
    (ScalarType::U8, ScalarType::I8, true),
    (ScalarType::U16, ScalarType::I16, true),
    (ScalarType::U32, ScalarType::I32, true),
    (ScalarType::U64, ScalarType::I64, true),
    (ScalarType::I8, ScalarType::U8, true),
    (ScalarType::I8, ScalarType::U16, true),
    (ScalarType::I8, ScalarType::U64, true),
    // enumeration -> integer: narrower, same width, wider
    (E16, ScalarType::U8, true),
    (E16, ScalarType::I8, true),
    (E16, ScalarType::I16, true),
    (E16, ScalarType::U16, false),
    (E16, ScalarType::U32, false),
    (E16, ScalarType::I32, false),
    (E8, ScalarType::U8, false),
    (E8, ScalarType::I16, false),
    // enumeration -> floating point
    (E16, ScalarType::F32, true),
    (E16, ScalarType::F64, true),
    (E16, ScalarType::F80, true),
    (E8, ScalarType::F32, true),
    (E8, ScalarType::F64, true),
    (E8, ScalarType::F80, true),
];

/// Evaluate every table row against the classifier.
///
/// Collects all mismatches instead of stopping at the first, so a single
/// run reports the full damage of a rule change.
pub fn verify() -> Result<(), Vec<ConformanceError>> {
    let mut mismatches = Vec::new();
    for &(from, to, expected) in CASES {
        let verdict = classify(ConversionQuery::new(from, to));
        if verdict.narrowing != expected {
            mismatches.push(ConformanceError::Mismatch {
                from: from.to_string(),
                to: to.to_string(),
                expected,
                actual: verdict.narrowing,
                rationale: format!("{:?}", verdict.rationale),
            });
        }
    }
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(mismatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_passes() {
        if let Err(mismatches) = verify() {
            for m in &mismatches {
                eprintln!("{m}");
            }
            panic!("{} conformance mismatch(es)", mismatches.len());
        }
    }

    #[test]
    fn test_table_covers_every_category() {
        // Guard against rows being dropped during edits.
        assert!(CASES.iter().any(|(f, t, _)| f.is_bool() && !t.is_bool()));
        assert!(CASES.iter().any(|(f, t, _)| !f.is_bool() && t.is_bool()));
        assert!(CASES.iter().any(|(f, t, _)| f.is_float() && t.is_integer()));
        assert!(CASES.iter().any(|(f, t, _)| f.is_integer() && t.is_float()));
        assert!(CASES.iter().any(|(f, t, _)| f.is_float() && t.is_float()));
        assert!(
            CASES
                .iter()
                .any(|(f, t, _)| f.is_unsigned_int() && t.is_signed_int())
        );
        assert!(
            CASES
                .iter()
                .any(|(f, t, _)| f.is_signed_int() && t.is_unsigned_int())
        );
        assert!(CASES.iter().any(|(f, t, _)| f.is_enum() && t.is_integer()));
        assert!(CASES.iter().any(|(f, t, _)| f.is_enum() && t.is_float()));
        assert!(CASES.iter().any(|(f, t, _)| f.is_enum() && t.is_bool()));
    }
}
