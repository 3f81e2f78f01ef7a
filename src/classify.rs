// src/classify.rs
//
// The narrowing classification core: a closed rule table over scalar
// descriptors, resolved in strict precedence order. Pure and total over the
// classifiable domain; anything the rules do not enumerate defaults to
// narrowing, never to safe.

use rustc_hash::FxHashMap;

use crate::types::{IntType, Scalar, ScalarType};

/// Why a verdict came out the way it did.
///
/// Each variant names the first rule that matched, without prescribing what
/// callers do with the answer. Diagnostics consult this to phrase the
/// rejection for each case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rationale {
    /// Source and destination are the same type.
    Identity,
    /// The destination's value range is a superset of the source's:
    /// every source value is representable, nothing can be lost.
    RangeSubset,
    /// Integer destination cannot represent every source value
    /// (truncation or sign change).
    RangeSupersetViolation,
    /// A bool destination can hold only two values; every non-bool scalar
    /// source is treated as lossy regardless of range.
    BoolTarget,
    /// A bool source promotes to 0 or 1, which every integer and float
    /// represents exactly.
    BoolSource,
    /// Integer-to-float or float-to-integer. Always narrowing: the verdict
    /// is type-pair-based, so no mantissa-width special cases.
    IntFloatCrossing,
    /// Float destination has a lower precision rank than the source.
    FloatPrecisionLoss,
    /// The pair fell outside the enumerated rules; the conservative
    /// default applies.
    UnsupportedDefault,
}

/// An ordered conversion pair. The key for override tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionQuery {
    pub from: ScalarType,
    pub to: ScalarType,
}

impl ConversionQuery {
    pub const fn new(from: ScalarType, to: ScalarType) -> Self {
        ConversionQuery { from, to }
    }
}

/// The classification result: the boolean answer plus the rule that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub narrowing: bool,
    pub rationale: Rationale,
}

impl Verdict {
    pub const fn safe(rationale: Rationale) -> Self {
        Verdict {
            narrowing: false,
            rationale,
        }
    }

    pub const fn narrowing(rationale: Rationale) -> Self {
        Verdict {
            narrowing: true,
            rationale,
        }
    }
}

// Derived PartialEq is not callable in const fn, so identity gets its own
// structural comparison.
const fn int_eq(a: IntType, b: IntType) -> bool {
    a.signed == b.signed && a.bits == b.bits
}

const fn scalar_eq(a: ScalarType, b: ScalarType) -> bool {
    match (a, b) {
        (ScalarType::Bool, ScalarType::Bool) => true,
        (ScalarType::Int(x), ScalarType::Int(y)) => int_eq(x, y),
        (ScalarType::Float(x), ScalarType::Float(y)) => x.bits == y.bits,
        (ScalarType::Enum(x), ScalarType::Enum(y)) => int_eq(x.underlying, y.underlying),
        _ => false,
    }
}

/// Classify a conversion pair under the strict (default) policy.
///
/// Rules resolve in precedence order; the first match wins:
/// 1. identity: `T -> T` never narrows, for every classifiable `T`.
/// 2. bool destination: any non-bool source narrows.
/// 3. bool source: widens into any integer or float.
/// 4. enumeration source: decays to its underlying integer.
/// 5. numeric range/precision rules over the decayed pair.
/// 6. everything else: narrowing by default.
///
/// `const` so the answer is usable in compile-time assertions.
pub const fn classify(query: ConversionQuery) -> Verdict {
    let ConversionQuery { from, to } = query;

    if scalar_eq(from, to) {
        return Verdict::safe(Rationale::Identity);
    }

    // Bool destination intercepts enumeration decay: enum -> bool narrows
    // even though enum -> integer is judged via the underlying type.
    if to.is_bool() {
        return Verdict::narrowing(Rationale::BoolTarget);
    }

    if from.is_bool() {
        return match to {
            ScalarType::Int(_) | ScalarType::Float(_) => Verdict::safe(Rationale::BoolSource),
            _ => Verdict::narrowing(Rationale::UnsupportedDefault),
        };
    }

    // Enumerations never appear as a destination in the closed set, so only
    // the source decays. An enum destination falls through to the default.
    let from = from.decayed();

    match (from, to) {
        (ScalarType::Int(f), ScalarType::Int(t)) => {
            if f.signed == t.signed {
                if t.bits >= f.bits {
                    Verdict::safe(Rationale::RangeSubset)
                } else {
                    Verdict::narrowing(Rationale::RangeSupersetViolation)
                }
            } else if !f.signed && t.signed {
                // The signed destination spends one bit on negatives, so it
                // needs strictly more bits to cover the unsigned top value.
                if t.bits > f.bits {
                    Verdict::safe(Rationale::RangeSubset)
                } else {
                    Verdict::narrowing(Rationale::RangeSupersetViolation)
                }
            } else {
                // Signed source, unsigned destination: negatives are
                // unrepresentable at any width.
                Verdict::narrowing(Rationale::RangeSupersetViolation)
            }
        }
        (ScalarType::Int(_), ScalarType::Float(_)) | (ScalarType::Float(_), ScalarType::Int(_)) => {
            Verdict::narrowing(Rationale::IntFloatCrossing)
        }
        (ScalarType::Float(f), ScalarType::Float(t)) => {
            if t.bits >= f.bits {
                Verdict::safe(Rationale::RangeSubset)
            } else {
                Verdict::narrowing(Rationale::FloatPrecisionLoss)
            }
        }
        _ => Verdict::narrowing(Rationale::UnsupportedDefault),
    }
}

/// Compile-time narrowing check over concrete Rust scalars.
///
/// The Rust rendition of a `static_assert`-able trait query:
///
/// ```
/// const _: () = assert!(narrowing::is_narrowing::<i64, i32>());
/// const _: () = assert!(!narrowing::is_narrowing::<u8, i16>());
/// ```
pub const fn is_narrowing<From: Scalar, To: Scalar>() -> bool {
    classify(ConversionQuery::new(From::DESCRIPTOR, To::DESCRIPTOR)).narrowing
}

/// A classifier with a pluggable compatibility policy.
///
/// The strict policy is exactly the free [`classify`] function. The
/// compatibility policy layers an override table on top, substituting
/// verdicts for pairs where a historical toolchain disagreed with the
/// standard rules. Overrides are an explicit lookup applied after the base
/// rules, never special cases baked into them, so strict behavior stays
/// well-defined and testable on its own.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    overrides: FxHashMap<ConversionQuery, Verdict>,
}

impl Classifier {
    /// Strict policy: no overrides.
    pub fn strict() -> Self {
        Classifier::default()
    }

    /// Substitute `verdict` for `query`, shadowing the base rules.
    pub fn override_verdict(&mut self, query: ConversionQuery, verdict: Verdict) {
        self.overrides.insert(query, verdict);
    }

    /// Compatibility policy for toolchains that fail to flag narrowing into
    /// bool: every common non-bool scalar converting to bool is overridden
    /// to a safe verdict, mirroring the misdetection being emulated.
    pub fn lenient_bool_target() -> Self {
        const LENIENT_SOURCES: [ScalarType; 13] = [
            ScalarType::I8,
            ScalarType::I16,
            ScalarType::I32,
            ScalarType::I64,
            ScalarType::I128,
            ScalarType::U8,
            ScalarType::U16,
            ScalarType::U32,
            ScalarType::U64,
            ScalarType::F32,
            ScalarType::F64,
            ScalarType::F80,
            ScalarType::F128,
        ];
        let mut classifier = Classifier::strict();
        for from in LENIENT_SOURCES {
            classifier.override_verdict(
                ConversionQuery::new(from, ScalarType::BOOL),
                Verdict::safe(Rationale::BoolTarget),
            );
        }
        classifier
    }

    /// Classify under this policy: base rules first, then the override
    /// table.
    pub fn classify(&self, query: ConversionQuery) -> Verdict {
        let base = classify(query);
        match self.overrides.get(&query) {
            Some(&verdict) => {
                tracing::trace!(?query, ?base, ?verdict, "compatibility override applied");
                verdict
            }
            None => base,
        }
    }
}
