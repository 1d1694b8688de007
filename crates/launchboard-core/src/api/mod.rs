//! JSON-serializable API types for the web dashboard, plus the conversions
//! that build chart figures from the dataset.

pub mod convert;
pub mod figures;
pub mod schema;
