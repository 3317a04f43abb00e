pub mod error;
pub mod loader;

pub use error::{Result, RulesError};
pub use loader::RuleSet;
