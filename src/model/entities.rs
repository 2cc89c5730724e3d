//! Entity arena: files, functions and compiled versions.
//!
//! Entities live in flat vectors inside [`Model`] and refer to each other by
//! index handles. Inline copies are owned by exactly one parent version, so
//! the inline relation forms a forest of handles rather than a tree of boxes.

use crate::utils::config::CALL_DESCRIPTOR_TAGS;
use std::collections::HashMap;

/// Handle of a [`SourceFile`] in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) usize);

/// Handle of a [`Function`] in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub(crate) usize);

/// Handle of a [`FunctionVersion`] in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionId(pub(crate) usize);

/// A script, identified by its full path
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,

    /// Functions in first-seen order
    pub functions: Vec<FunctionId>,

    pub(crate) function_index: HashMap<String, FunctionId>,

    /// Top-level versions by compiled-version id
    pub(crate) version_index: HashMap<u32, VersionId>,
}

impl SourceFile {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            functions: Vec::new(),
            function_index: HashMap::new(),
            version_index: HashMap::new(),
        }
    }
}

/// A source function that may have been compiled several times
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub file: FileId,

    /// Top-level versions in compilation order; the last one is the newest
    pub versions: Vec<VersionId>,

    /// Set once any version of this function records a deopt
    pub has_deopted: bool,

    /// Why a caller refused to inline this function (last notice wins)
    pub did_not_inline: Option<String>,

    pub(crate) version_index: HashMap<u32, VersionId>,
}

impl Function {
    pub(crate) fn new(name: impl Into<String>, file: FileId) -> Self {
        Self {
            name: name.into(),
            file,
            versions: Vec::new(),
            has_deopted: false,
            did_not_inline: None,
            version_index: HashMap::new(),
        }
    }

    /// Newest compiled version
    pub fn latest_version(&self) -> Option<VersionId> {
        self.versions.last().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// A compiled version listed under its function
    TopLevel { id: u32, function: FunctionId },

    /// A callee body inlined somewhere inside top-level version `owner`
    Inline { secondary_id: u32, owner: VersionId },
}

/// One concrete compiled unit
#[derive(Debug, Clone)]
pub struct FunctionVersion {
    pub name: String,
    pub file: FileId,
    pub kind: VersionKind,

    /// Source text exactly as dumped; every offset below refers to it
    pub code: String,

    /// Inline copies placed directly inside this version
    pub inlines: Vec<InlineSite>,

    pub deopts: Vec<String>,
    pub runtime_calls: Vec<RuntimeCall>,

    /// All inline copies of a top-level version by secondary id
    pub(crate) inline_index: HashMap<u32, VersionId>,
}

impl FunctionVersion {
    pub(crate) fn new(name: &str, file: FileId, kind: VersionKind, code: String) -> Self {
        Self {
            name: name.to_string(),
            file,
            kind,
            code,
            inlines: Vec::new(),
            deopts: Vec::new(),
            runtime_calls: Vec::new(),
            inline_index: HashMap::new(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        matches!(self.kind, VersionKind::TopLevel { .. })
    }
}

/// A child copy and the UTF-16 offset in the parent where it was inlined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSite {
    pub child: VersionId,
    pub offset: usize,
}

/// A call site that stayed a genuine runtime call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCall {
    /// UTF-16 offset into the owning version's source
    pub offset: usize,

    /// Instruction tag from the IR log
    pub tag: String,
}

impl RuntimeCall {
    /// Calls routed through a call descriptor may name another function
    pub fn is_call_descriptor(&self) -> bool {
        CALL_DESCRIPTOR_TAGS.contains(&self.tag.as_str())
    }

    /// Kind shown in the document
    pub fn kind(&self) -> &str {
        if self.is_call_descriptor() {
            "CallWithDescriptor"
        } else {
            &self.tag
        }
    }
}

/// The reconstructed trace: every entity plus the lookup tables the three
/// streams need to refer to them
#[derive(Debug, Default)]
pub struct Model {
    pub(crate) files: Vec<SourceFile>,
    pub(crate) functions: Vec<Function>,
    pub(crate) versions: Vec<FunctionVersion>,

    pub(crate) file_index: HashMap<String, FileId>,

    /// Function names across all files; a later file's function shadows an earlier one
    pub(crate) function_names: HashMap<String, FunctionId>,

    /// Top-level versions by compiled-version id across all files
    pub(crate) versions_by_id: HashMap<u32, VersionId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0]
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.0]
    }

    pub fn version(&self, id: VersionId) -> &FunctionVersion {
        &self.versions[id.0]
    }

    pub(crate) fn function_mut(&mut self, id: FunctionId) -> &mut Function {
        &mut self.functions[id.0]
    }

    pub(crate) fn version_mut(&mut self, id: VersionId) -> &mut FunctionVersion {
        &mut self.versions[id.0]
    }

    /// Files in first-seen order
    pub fn files(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        self.files.iter().enumerate().map(|(i, f)| (FileId(i), f))
    }

    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &Function)> {
        self.functions.iter().enumerate().map(|(i, f)| (FunctionId(i), f))
    }

    pub fn file_by_path(&self, path: &str) -> Option<&SourceFile> {
        self.file_index.get(path).map(|id| self.file(*id))
    }

    /// Global name lookup used by refusal notices and call-descriptor sites
    pub fn function_by_name(&self, name: &str) -> Option<&Function> {
        self.function_names.get(name).map(|id| self.function(*id))
    }

    /// Function a top-level version belongs to; `None` for inline copies
    pub fn function_of(&self, version: VersionId) -> Option<FunctionId> {
        match self.version(version).kind {
            VersionKind::TopLevel { function, .. } => Some(function),
            VersionKind::Inline { .. } => None,
        }
    }

    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    pub fn deopt_count(&self) -> usize {
        self.versions.iter().map(|v| v.deopts.len()).sum()
    }

    pub(crate) fn push_version(&mut self, version: FunctionVersion) -> VersionId {
        self.versions.push(version);
        VersionId(self.versions.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_call_kind() {
        let call = RuntimeCall {
            offset: 0,
            tag: "InvokeFunction".to_string(),
        };
        assert!(call.is_call_descriptor());
        assert_eq!(call.kind(), "CallWithDescriptor");

        let call = RuntimeCall {
            offset: 0,
            tag: "StringAdd".to_string(),
        };
        assert!(!call.is_call_descriptor());
        assert_eq!(call.kind(), "StringAdd");
    }
}
