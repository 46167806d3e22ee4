//! CLI command implementations

pub mod export;
pub mod generate;
pub mod list;
pub mod preview;
pub mod validate;

mod reporting;
