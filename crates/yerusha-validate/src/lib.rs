mod checks;
mod cross;
mod engine;
pub mod normalize;
pub mod report;
pub mod resolve;

pub use engine::run_validation;
pub use normalize::normalize;
pub use report::write_report_json;
pub use resolve::resolve_values;
