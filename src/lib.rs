pub mod checker;
pub mod cli;
pub mod config;
pub mod convention;
pub mod path;
pub mod segment;

pub use checker::ConventionChecker;
pub use config::Config;
pub use convention::{
    detect, is_camel_case, is_chain_case, is_flat_case, is_kebab_case, is_pascal_case,
    is_snake_case, is_upper_case, to_camel_case, to_chain_case, to_flat_case, to_kebab_case,
    to_pascal_case, to_snake_case, to_upper_case, Convention, ParseConventionError,
};
pub use segment::{segment, segment_bytes};

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub file: PathBuf,
    pub findings: Vec<Finding>,
}

/// An identifier that does not follow the expected convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub identifier: String,
    pub line: usize,
    pub column: usize,
    pub detected: Vec<Convention>,
    pub suggestion: String,
}
