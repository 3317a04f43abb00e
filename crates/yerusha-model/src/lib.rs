pub mod field;
pub mod report;

pub use field::{FieldSpec, Scope};
pub use report::{FieldResult, ValidationReport};
