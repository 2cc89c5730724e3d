//! Function-source extraction from the code-trace dump.
//!
//! Block layout:
//!
//! ```text
//! --- FUNCTION SOURCE (app.js:foo) id{3,1} ---
//! <body>
//! --- END ---
//! INLINE (foo) id{3,1} AS 1 AT <0:42>
//! [deoptimizing (DEOPT eager): begin 0x2a1 <JSFunction main> (opt #3) @4, reason]
//! ```

use super::schema::{InlinePlacement, SourceBlock};
use super::{parse_number, snippet};
use crate::utils::config::SOURCE_BLOCK_DELIMITER;
use crate::utils::error::{ParseError, Stream};
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\((.*?):(.*?)\) id\{(\d+),(\d+)\} ---\n([\s\S]*)\n--- END ---").unwrap()
});

static DEOPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[deoptimizing[^:]*: begin [^ ]* (.*?)\]").unwrap());

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"INLINE \(.*?\) id\{\d+,\d+\} AS (\d+) AT <(\d+):(\d+)>").unwrap()
});

/// Split the source dump into function-source blocks
///
/// **Public** - first stage of the pipeline
///
/// # Errors
/// * `ParseError::MalformedHeader` - a non-blank chunk does not start with a block header
/// * `ParseError::InvalidNumber` - an id or offset does not fit its integer type
pub fn parse_source_dump(text: &str) -> Result<Vec<SourceBlock>, ParseError> {
    let blocks = text
        .split(SOURCE_BLOCK_DELIMITER)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_block)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Scanned {} function-source blocks", blocks.len());
    Ok(blocks)
}

fn parse_block(chunk: &str) -> Result<SourceBlock, ParseError> {
    let caps = HEADER
        .captures(chunk)
        .ok_or_else(|| ParseError::MalformedHeader {
            stream: Stream::SourceDump,
            snippet: snippet(chunk),
        })?;

    let block = SourceBlock {
        file: caps[1].to_string(),
        name: caps[2].to_string(),
        primary_id: parse_number(Stream::SourceDump, &caps[3])?,
        secondary_id: parse_number(Stream::SourceDump, &caps[4])?,
        code: caps[5].to_string(),
        deopts: DEOPT
            .captures_iter(chunk)
            .map(|c| c[1].to_string())
            .collect(),
        placement: parse_placement(chunk)?,
    };

    if let Some(placement) = &block.placement {
        if placement.secondary_id != block.secondary_id {
            warn!(
                "INLINE marker for {} names copy {} but the header says {}",
                block.name, placement.secondary_id, block.secondary_id
            );
        }
    }

    Ok(block)
}

fn parse_placement(chunk: &str) -> Result<Option<InlinePlacement>, ParseError> {
    let Some(caps) = INLINE.captures(chunk) else {
        return Ok(None);
    };

    Ok(Some(InlinePlacement {
        secondary_id: parse_number(Stream::SourceDump, &caps[1])?,
        parent_id: parse_number(Stream::SourceDump, &caps[2])?,
        offset: parse_number(Stream::SourceDump, &caps[3])?,
    }))
}
