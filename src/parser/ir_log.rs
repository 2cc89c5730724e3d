//! IR-annotation extraction from the hydrogen trace file.
//!
//! Each compilation block starts with a line-anchored `begin_compilation`,
//! followed by a header naming the version it describes:
//!
//! ```text
//! begin_compilation
//!   name "app.js:foo"
//!   method "foo:3"
//! ```
//!
//! Instruction lines flagged with `changes[*]` and a `pos:` field are runtime
//! calls. `pos:N` addresses the top-level source; `pos:S_N` addresses offset
//! `N` inside inline copy `S`.

use super::schema::{ChangeAnnotation, ChangePosition, IrBlock};
use super::{parse_number, snippet};
use crate::utils::config::IR_BLOCK_DELIMITER;
use crate::utils::error::{ParseError, Stream};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?m)^{}", regex::escape(IR_BLOCK_DELIMITER))).unwrap()
});

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*name "(.*?):(.*?)"\s+method "(.*?):(\d+)""#).unwrap()
});

static CHANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s+\d \d \w\d+ (\w+).*? changes\[\*\][^\n]* pos:(\d+)(?:_(\d+))? ").unwrap()
});

/// Split the IR log into compilation blocks and collect their runtime calls
///
/// **Public** - second stage of the pipeline
///
/// # Errors
/// * `ParseError::MalformedHeader` - a non-blank block lacks the `name`/`method` header
/// * `ParseError::InvalidNumber` - an id or position does not fit its integer type
pub fn parse_ir_log(text: &str) -> Result<Vec<IrBlock>, ParseError> {
    let blocks = BLOCK_SPLIT
        .split(text)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_block)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Scanned {} IR blocks with {} runtime calls",
        blocks.len(),
        blocks.iter().map(|b| b.changes.len()).sum::<usize>()
    );
    Ok(blocks)
}

fn parse_block(chunk: &str) -> Result<IrBlock, ParseError> {
    let caps = HEADER
        .captures(chunk)
        .ok_or_else(|| ParseError::MalformedHeader {
            stream: Stream::IrLog,
            snippet: snippet(chunk),
        })?;

    let mut changes = Vec::new();
    for change in CHANGE.captures_iter(chunk) {
        let first: usize = parse_number(Stream::IrLog, &change[2])?;
        let second = match change.get(3) {
            Some(m) => parse_number::<usize>(Stream::IrLog, m.as_str())?,
            None => 0,
        };

        // A zero second offset reads the same as a missing one
        let position = if second != 0 {
            ChangePosition::Inlined {
                secondary_id: parse_number(Stream::IrLog, &change[2])?,
                offset: second,
            }
        } else {
            ChangePosition::TopLevel(first)
        };

        changes.push(ChangeAnnotation {
            tag: change[1].to_string(),
            position,
        });
    }

    // The file comes from `name`, the function from `method`
    Ok(IrBlock {
        file: caps[1].to_string(),
        name: caps[3].to_string(),
        primary_id: parse_number(Stream::IrLog, &caps[4])?,
        changes,
    })
}
