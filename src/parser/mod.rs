//! Grammar scanner for the three trace streams.
//!
//! This module handles:
//! - Splitting the source dump into function-source blocks
//! - Extracting runtime-call annotations from the IR log
//! - Picking refusal notices out of the engine's free-text output
//!
//! Scanning is stateless. Cross-references are left for the model builder.

pub mod ir_log;
pub mod refusal;
pub mod schema;
pub mod source_dump;

// Re-export main types
pub use ir_log::parse_ir_log;
pub use refusal::{is_environment_reason, parse_refusals};
pub use schema::{
    ChangeAnnotation, ChangePosition, InlinePlacement, IrBlock, RefusalNotice, SourceBlock,
};
pub use source_dump::parse_source_dump;

use crate::utils::error::{ParseError, Stream};
use std::str::FromStr;

/// Parse a `\d+` capture, reporting overflow as a parse error
fn parse_number<T: FromStr>(stream: Stream, value: &str) -> Result<T, ParseError> {
    value.parse::<T>().map_err(|_| ParseError::InvalidNumber {
        stream,
        value: value.to_string(),
    })
}

/// First line of a chunk, for error messages
fn snippet(chunk: &str) -> String {
    chunk.trim_start().lines().next().unwrap_or_default().chars().take(120).collect()
}
