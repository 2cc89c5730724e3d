//! Span rendering of compiled versions.
//!
//! - `find_end`: expression-end heuristic for traced positions
//! - `splice`: shift-correct application of overlapping replacements
//! - `version`: markup for one version, recursing into inline copies
//! - `units`: UTF-16 code-unit addressing of source text

pub mod find_end;
pub mod splice;
pub mod units;
pub mod version;

pub use find_end::find_end;
pub use splice::{apply_replacements, Replacement};
pub use units::Utf16Index;
pub use version::render_version;

/// Escape the markup characters of literal text
pub fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape literal text placed inside a double-quoted attribute
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
