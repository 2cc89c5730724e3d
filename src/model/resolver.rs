//! Identity resolution across the three streams.
//!
//! The source dump, the IR log and the engine output name the same entities
//! through different keys: file path, function name, compiled-version id and
//! inline secondary id. Lookups here are exact; a miss is a
//! [`ResolveError`] and stops the build.

use super::entities::{
    FileId, Function, FunctionId, FunctionVersion, Model, SourceFile, VersionId, VersionKind,
};
use crate::utils::error::ResolveError;
use std::collections::HashSet;

impl Model {
    /// File for `path`, created on first sight
    pub(crate) fn intern_file(&mut self, path: &str) -> FileId {
        if let Some(id) = self.file_index.get(path) {
            return *id;
        }

        let id = FileId(self.files.len());
        self.files.push(SourceFile::new(path));
        self.file_index.insert(path.to_string(), id);
        id
    }

    /// Function `name` in `file`, created on first sight
    pub(crate) fn intern_function(&mut self, file: FileId, name: &str) -> FunctionId {
        if let Some(id) = self.files[file.0].function_index.get(name) {
            return *id;
        }

        let id = FunctionId(self.functions.len());
        self.functions.push(Function::new(name, file));

        let source_file = &mut self.files[file.0];
        source_file.functions.push(id);
        source_file.function_index.insert(name.to_string(), id);
        self.function_names.insert(name.to_string(), id);
        id
    }

    pub fn resolve_file(&self, path: &str) -> Result<FileId, ResolveError> {
        self.file_index
            .get(path)
            .copied()
            .ok_or_else(|| ResolveError::UnknownFile(path.to_string()))
    }

    pub fn resolve_function(&self, file: FileId, name: &str) -> Result<FunctionId, ResolveError> {
        let source_file = self.file(file);
        source_file
            .function_index
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::UnknownFunction {
                file: source_file.path.clone(),
                name: name.to_string(),
            })
    }

    /// Top-level version named by an IR header: file, then function, then id
    pub fn resolve_version(&self, path: &str, name: &str, id: u32) -> Result<VersionId, ResolveError> {
        let file = self.resolve_file(path)?;
        let function = self.resolve_function(file, name)?;

        self.function(function)
            .version_index
            .get(&id)
            .copied()
            .ok_or_else(|| ResolveError::UnknownVersion {
                file: path.to_string(),
                id,
            })
    }

    /// Top-level version owning an inline copy
    ///
    /// The copy's block names the callee's file, which need not be the
    /// owner's, so the file's id table is consulted first and the global one
    /// after it. A strict per-file lookup would reject every copy inlined
    /// across files; only a miss in both tables is an error.
    pub fn resolve_owner(&self, path: &str, id: u32) -> Result<VersionId, ResolveError> {
        self.file_index
            .get(path)
            .and_then(|file| self.file(*file).version_index.get(&id))
            .or_else(|| self.versions_by_id.get(&id))
            .copied()
            .ok_or_else(|| ResolveError::UnknownVersion {
                file: path.to_string(),
                id,
            })
    }

    /// Inline copy `secondary_id` of top-level version `owner`
    pub fn resolve_inline(&self, owner: VersionId, secondary_id: u32) -> Result<VersionId, ResolveError> {
        self.version(owner)
            .inline_index
            .get(&secondary_id)
            .copied()
            .ok_or_else(|| ResolveError::UnknownInline {
                owner_id: self.primary_id(owner),
                secondary_id,
            })
    }

    /// Version an inline copy is placed in: the owner itself for parent id 0
    pub fn resolve_inline_parent(&self, owner: VersionId, parent_id: u32) -> Result<VersionId, ResolveError> {
        if parent_id == 0 {
            return Ok(owner);
        }

        self.resolve_inline(owner, parent_id)
            .map_err(|_| ResolveError::UnknownInlineParent {
                owner_id: self.primary_id(owner),
                parent_id,
            })
    }

    /// Add `child` to the arena as inline copy `secondary_id` of `owner`
    ///
    /// A repeated secondary id is rejected before the copy is added.
    pub(crate) fn register_inline(
        &mut self,
        owner: VersionId,
        secondary_id: u32,
        child: FunctionVersion,
    ) -> Result<VersionId, ResolveError> {
        if self.version(owner).inline_index.contains_key(&secondary_id) {
            return Err(ResolveError::DuplicateInline {
                owner_id: self.primary_id(owner),
                secondary_id,
            });
        }

        let handle = self.push_version(child);
        self.version_mut(owner).inline_index.insert(secondary_id, handle);
        Ok(handle)
    }

    /// Compiled-version id of a top-level version, or of an inline copy's owner
    pub fn primary_id(&self, version: VersionId) -> u32 {
        match self.version(version).kind {
            VersionKind::TopLevel { id, .. } => id,
            VersionKind::Inline { owner, .. } => self.primary_id(owner),
        }
    }

    /// Check that no inline copy hangs below more than one parent
    pub fn verify_inline_forest(&self) -> Result<(), ResolveError> {
        let mut seen = HashSet::new();

        for version in &self.versions {
            for site in &version.inlines {
                if !seen.insert(site.child) || self.version(site.child).is_top_level() {
                    return Err(ResolveError::SharedInline(site.child.0));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_version(path: &str, name: &str, id: u32) -> (Model, VersionId) {
        let mut model = Model::new();
        let file = model.intern_file(path);
        let function = model.intern_function(file, name);
        let version = model.push_version(FunctionVersion::new(
            name,
            file,
            VersionKind::TopLevel { id, function },
            String::new(),
        ));
        model.function_mut(function).version_index.insert(id, version);
        model.files[file.0].version_index.insert(id, version);
        model.versions_by_id.insert(id, version);
        (model, version)
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut model = Model::new();
        let a = model.intern_file("a.js");
        assert_eq!(model.intern_file("a.js"), a);

        let f = model.intern_function(a, "foo");
        assert_eq!(model.intern_function(a, "foo"), f);
        assert_eq!(model.file(a).functions, vec![f]);
    }

    #[test]
    fn test_resolve_misses_are_errors() {
        let (model, _) = model_with_version("a.js", "foo", 1);

        assert_eq!(
            model.resolve_version("b.js", "foo", 1),
            Err(ResolveError::UnknownFile("b.js".to_string()))
        );
        assert!(matches!(
            model.resolve_version("a.js", "bar", 1),
            Err(ResolveError::UnknownFunction { .. })
        ));
        assert!(matches!(
            model.resolve_version("a.js", "foo", 2),
            Err(ResolveError::UnknownVersion { id: 2, .. })
        ));
    }

    #[test]
    fn test_resolve_owner_falls_back_to_global_ids() {
        let (model, version) = model_with_version("a.js", "foo", 7);
        assert_eq!(model.resolve_owner("lib.js", 7), Ok(version));
        assert!(model.resolve_owner("lib.js", 8).is_err());
    }

    #[test]
    fn test_duplicate_inline_is_error() {
        let (mut model, owner) = model_with_version("a.js", "foo", 1);
        let file = model.version(owner).file;
        let copy = || {
            FunctionVersion::new(
                "bar",
                file,
                VersionKind::Inline { secondary_id: 1, owner },
                String::new(),
            )
        };

        let child = model.register_inline(owner, 1, copy()).unwrap();
        assert_eq!(
            model.register_inline(owner, 1, copy()),
            Err(ResolveError::DuplicateInline {
                owner_id: 1,
                secondary_id: 1
            })
        );
        // The rejected copy never reached the arena
        assert_eq!(model.version_count(), 2);
        assert_eq!(model.resolve_inline_parent(owner, 0), Ok(owner));
        assert_eq!(model.resolve_inline_parent(owner, 1), Ok(child));
        assert!(matches!(
            model.resolve_inline_parent(owner, 5),
            Err(ResolveError::UnknownInlineParent { parent_id: 5, .. })
        ));
    }
}
