// src/types/mod.rs
//
// Type descriptor model: the reified scalar types the classifier operates on.

mod concrete;
mod scalar;
mod source;

pub use concrete::Scalar;
pub use scalar::{EnumType, FloatType, IntType, ScalarType};
pub use source::{SourceType, describe};
