//! Machine-readable summary of a traced run.
//!
//! This module defines the structure of the JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::model::{Model, VersionId};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Schema version for compatibility checking
    pub version: String,

    pub files: Vec<FileSummary>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: String,
    pub functions: Vec<FunctionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
    pub deopted: bool,

    /// Compiled versions, oldest first
    pub versions: Vec<VersionSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_not_inline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    /// Compiled-version id from the trace
    pub id: u32,

    /// Inline copies anywhere below this version
    pub inlined_calls: usize,

    /// Runtime calls in this version and all its inline copies
    pub runtime_calls: usize,

    pub deopts: Vec<String>,
}

impl TraceSummary {
    pub fn function_count(&self) -> usize {
        self.files.iter().map(|f| f.functions.len()).sum()
    }

    pub fn version_count(&self) -> usize {
        self.functions().map(|f| f.versions.len()).sum()
    }

    pub fn deopt_count(&self) -> usize {
        self.functions()
            .flat_map(|f| &f.versions)
            .map(|v| v.deopts.len())
            .sum()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionSummary> {
        self.files.iter().flat_map(|f| &f.functions)
    }
}

/// Summarise the model
///
/// **Public** - used by commands to create the JSON output
pub fn summarize(model: &Model) -> TraceSummary {
    use chrono::Utc;

    let files = model
        .files()
        .map(|(_, file)| FileSummary {
            path: file.path.clone(),
            functions: file
                .functions
                .iter()
                .map(|id| {
                    let function = model.function(*id);
                    FunctionSummary {
                        name: function.name.clone(),
                        deopted: function.has_deopted,
                        versions: function
                            .versions
                            .iter()
                            .map(|v| summarize_version(model, *v))
                            .collect(),
                        did_not_inline: function.did_not_inline.clone(),
                    }
                })
                .collect(),
        })
        .collect();

    TraceSummary {
        version: SCHEMA_VERSION.to_string(),
        files,
        generated_at: Utc::now().to_rfc3339(),
    }
}

fn summarize_version(model: &Model, id: VersionId) -> VersionSummary {
    let version = model.version(id);
    let (inlined_calls, runtime_calls) = count_tree(model, id);

    VersionSummary {
        id: model.primary_id(id),
        inlined_calls,
        runtime_calls,
        deopts: version.deopts.clone(),
    }
}

/// (inline copies, runtime calls) in the subtree rooted at `id`
fn count_tree(model: &Model, id: VersionId) -> (usize, usize) {
    let version = model.version(id);

    version
        .inlines
        .iter()
        .map(|site| count_tree(model, site.child))
        .fold((0, version.runtime_calls.len()), |(inlines, calls), (i, c)| {
            (inlines + 1 + i, calls + c)
        })
}
