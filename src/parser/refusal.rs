//! Refusal-notice extraction from the engine's console output.

use super::schema::RefusalNotice;
use crate::utils::config::ENVIRONMENT_REFUSAL_REASONS;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static NOTICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Did not inline (.*?) called from (.*?) \((.*?)\)\.").unwrap());

/// Collect every informative "Did not inline" notice
///
/// Notices whose reason only reflects the compilation environment
/// (depth limit, recursion, cumulative size) are dropped.
pub fn parse_refusals(text: &str) -> Vec<RefusalNotice> {
    let mut notices = Vec::new();
    let mut skipped = 0usize;

    for caps in NOTICE.captures_iter(text) {
        let reason = &caps[3];
        if is_environment_reason(reason) {
            skipped += 1;
            continue;
        }

        notices.push(RefusalNotice {
            callee: caps[1].to_string(),
            caller: caps[2].to_string(),
            reason: reason.to_string(),
        });
    }

    debug!(
        "Found {} refusal notices ({} environment-only skipped)",
        notices.len(),
        skipped
    );
    notices
}

/// True when a refusal reason says nothing about the callee itself
pub fn is_environment_reason(reason: &str) -> bool {
    ENVIRONMENT_REFUSAL_REASONS
        .iter()
        .any(|pattern| reason.contains(pattern))
}
