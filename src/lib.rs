// src/lib.rs
//! Classification of narrowing scalar conversions.
//!
//! Given descriptors for two scalar types, [`classify`] decides whether
//! converting a value of the first into the second may lose information,
//! change sign, or reduce precision, under the rules strict initialization
//! forms use to forbid implicit lossy conversions. The verdict depends only
//! on the type pair, never on a value.
//!
//! ```
//! use narrowing::{ConversionQuery, Rationale, ScalarType, classify};
//!
//! let verdict = classify(ConversionQuery::new(ScalarType::I64, ScalarType::I32));
//! assert!(verdict.narrowing);
//! assert_eq!(verdict.rationale, Rationale::RangeSupersetViolation);
//!
//! // Usable in compile-time guards over concrete Rust scalars:
//! const _: () = assert!(!narrowing::is_narrowing::<u8, i16>());
//! ```

pub mod classify;
pub mod conformance;
pub mod errors;
pub mod types;

pub use classify::{Classifier, ConversionQuery, Rationale, Verdict, classify, is_narrowing};
pub use errors::{ConformanceError, DescribeError};
pub use types::{EnumType, FloatType, IntType, Scalar, ScalarType, SourceType, describe};
