//! Model construction from the scanned records.
//!
//! Order matters: source blocks establish files, functions, versions and the
//! inline tables; IR blocks are routed through those tables; refusal notices
//! are attached last.

use super::entities::{FunctionVersion, InlineSite, Model, RuntimeCall, VersionId, VersionKind};
use crate::parser::{
    parse_ir_log, parse_refusals, parse_source_dump, ChangePosition, IrBlock, RefusalNotice,
    SourceBlock,
};
use crate::utils::error::{BuildError, ResolveError};
use log::{debug, info};

/// The three raw text streams of one traced run
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceInputs<'a> {
    /// `--- FUNCTION SOURCE` dump (code.asm)
    pub source_dump: &'a str,

    /// Hydrogen IR log (hg.cfg)
    pub ir_log: &'a str,

    /// Engine stdout and stderr
    pub engine_output: &'a str,
}

/// Build the model from the three streams
///
/// **Public** - main entry point of the modelling stage
///
/// # Errors
/// * `BuildError::Parse` - a block header does not match its grammar
/// * `BuildError::Resolve` - a record names an entity no earlier record established
pub fn build_model(inputs: &TraceInputs<'_>) -> Result<Model, BuildError> {
    let mut model = Model::new();

    for block in parse_source_dump(inputs.source_dump)? {
        model.add_source_block(block)?;
    }

    for block in parse_ir_log(inputs.ir_log)? {
        model.add_ir_block(&block)?;
    }

    let notices = parse_refusals(inputs.engine_output);
    let attached = notices.iter().filter(|n| model.apply_refusal(n)).count();
    debug!("Attached {} of {} refusal reasons", attached, notices.len());

    model.verify_inline_forest()?;

    info!(
        "Model built: {} files, {} functions, {} compiled versions, {} deopts",
        model.files.len(),
        model.functions.len(),
        model.version_count(),
        model.deopt_count()
    );

    Ok(model)
}

impl Model {
    /// Add one function-source block
    ///
    /// A block with secondary id 0 becomes a new top-level version of its
    /// function. Any other block becomes an inline copy owned by the version
    /// with the block's primary id, and is placed in its parent when the
    /// block carries an INLINE marker.
    pub fn add_source_block(&mut self, block: SourceBlock) -> Result<VersionId, ResolveError> {
        if block.is_top_level() {
            Ok(self.add_top_level(block))
        } else {
            self.add_inline(block)
        }
    }

    fn add_top_level(&mut self, block: SourceBlock) -> VersionId {
        let file = self.intern_file(&block.file);
        let function = self.intern_function(file, &block.name);
        let id = block.primary_id;

        let mut version = FunctionVersion::new(
            &block.name,
            file,
            VersionKind::TopLevel { id, function },
            block.code,
        );
        version.deopts = block.deopts;
        let deopted = !version.deopts.is_empty();
        let handle = self.push_version(version);

        let entry = self.function_mut(function);
        entry.versions.push(handle);
        entry.version_index.insert(id, handle);
        entry.has_deopted |= deopted;

        self.files[file.0].version_index.insert(id, handle);
        self.versions_by_id.insert(id, handle);

        handle
    }

    fn add_inline(&mut self, block: SourceBlock) -> Result<VersionId, ResolveError> {
        let owner = self.resolve_owner(&block.file, block.primary_id)?;

        let parent = match &block.placement {
            Some(placement) => Some((
                self.resolve_inline_parent(owner, placement.parent_id)?,
                placement.offset,
            )),
            None => None,
        };

        let file = self.version(owner).file;
        let kind = VersionKind::Inline {
            secondary_id: block.secondary_id,
            owner,
        };
        let handle = self.register_inline(
            owner,
            block.secondary_id,
            FunctionVersion::new(&block.name, file, kind, block.code),
        )?;

        if let Some((parent, offset)) = parent {
            self.version_mut(parent).inlines.push(InlineSite {
                child: handle,
                offset,
            });
        }

        // Deopts logged next to an inline copy belong to the running code
        if !block.deopts.is_empty() {
            self.version_mut(owner).deopts.extend(block.deopts);
            if let Some(function) = self.function_of(owner) {
                self.function_mut(function).has_deopted = true;
            }
        }

        Ok(handle)
    }

    /// Route the runtime calls of one IR block to their versions
    pub fn add_ir_block(&mut self, block: &IrBlock) -> Result<(), ResolveError> {
        let version = self.resolve_version(&block.file, &block.name, block.primary_id)?;

        for change in &block.changes {
            let (target, offset) = match change.position {
                ChangePosition::TopLevel(offset) => (version, offset),
                ChangePosition::Inlined {
                    secondary_id,
                    offset,
                } => (self.resolve_inline(version, secondary_id)?, offset),
            };

            self.version_mut(target).runtime_calls.push(RuntimeCall {
                offset,
                tag: change.tag.clone(),
            });
        }

        Ok(())
    }

    /// Attach a refusal reason to the named callee
    ///
    /// Returns false when no function of that name was compiled; the notice
    /// is then dropped.
    pub fn apply_refusal(&mut self, notice: &RefusalNotice) -> bool {
        let Some(id) = self.function_names.get(&notice.callee).copied() else {
            debug!(
                "Dropping refusal for unknown function {} (called from {})",
                notice.callee, notice.caller
            );
            return false;
        };

        self.function_mut(id).did_not_inline = Some(notice.reason.clone());
        true
    }
}
