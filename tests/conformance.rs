// tests/conformance.rs
//
// Drives the conformance suite the way a build pipeline would: every table
// row must agree with the classifier, and any mismatch fails with a
// diagnostic naming the pair and both verdicts.

use narrowing::{
    Classifier, ConversionQuery, IntType, ScalarType, SourceType, classify, conformance, describe,
    is_narrowing,
};

#[test]
fn conformance_table_agrees_with_classifier() {
    match conformance::verify() {
        Ok(()) => {}
        Err(mismatches) => {
            for m in &mismatches {
                eprintln!("{m}");
            }
            panic!(
                "{} of {} conformance rows disagree with the classifier",
                mismatches.len(),
                conformance::CASES.len()
            );
        }
    }
}

#[test]
fn compatibility_policy_only_moves_overridden_rows() {
    // Under the lenient-bool-target policy, every row that changes verdict
    // must be a non-enum scalar converting into bool.
    let lenient = Classifier::lenient_bool_target();
    for &(from, to, _) in conformance::CASES {
        let query = ConversionQuery::new(from, to);
        let strict = classify(query);
        let relaxed = lenient.classify(query);
        if strict != relaxed {
            assert!(to.is_bool() && !from.is_bool() && !from.is_enum());
        }
    }
}

#[test]
fn non_scalars_are_rejected_before_classification() {
    let ptr = SourceType::Pointer(Box::new(SourceType::Scalar(ScalarType::I32)));
    assert!(describe(&ptr).is_err());

    let agg = SourceType::Aggregate("Config".into());
    let err = describe(&agg).unwrap_err();
    assert!(err.to_string().contains("Config"));
}

// Compile-time guard over concrete Rust scalars, the rendition of the
// original static_assert table that the type system itself enforces.
const _: () = {
    assert!(!is_narrowing::<bool, i32>());
    assert!(!is_narrowing::<bool, bool>());
    assert!(is_narrowing::<i32, bool>());
    assert!(is_narrowing::<f64, i32>());
    assert!(is_narrowing::<i32, f64>());
    assert!(is_narrowing::<f64, f32>());
    assert!(!is_narrowing::<f32, f64>());
    assert!(!is_narrowing::<u8, i16>());
    assert!(is_narrowing::<u8, i8>());
    assert!(is_narrowing::<i8, u64>());
    assert!(!is_narrowing::<u64, i128>());
};

#[test]
fn hand_rolled_enum_descriptor_decays() {
    struct Opcode;
    impl narrowing::Scalar for Opcode {
        const DESCRIPTOR: ScalarType = ScalarType::enumeration(IntType::unsigned(16));
    }

    assert!(is_narrowing::<Opcode, u8>());
    assert!(!is_narrowing::<Opcode, u16>());
    assert!(!is_narrowing::<Opcode, u32>());
    assert!(is_narrowing::<Opcode, f32>());
    assert!(is_narrowing::<Opcode, bool>());
}
