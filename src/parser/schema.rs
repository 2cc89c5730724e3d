//! Record types produced by the grammar scanner.
//!
//! Records carry identifiers exactly as they appear in the trace text.
//! Nothing here is resolved against other records; that is the model's job.

/// One `--- FUNCTION SOURCE` block from the source dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlock {
    /// Full path of the script the function lives in
    pub file: String,

    /// Function name
    pub name: String,

    /// Compiled-version id (for inline copies: the owning version's id)
    pub primary_id: u32,

    /// Zero for a top-level version, otherwise the inline copy's id within its owner
    pub secondary_id: u32,

    /// Source text of the compiled unit, between header and end marker
    pub code: String,

    /// Reasons of every deoptimization logged inside this block
    pub deopts: Vec<String>,

    /// Where this inline copy was placed, if the block documents it
    pub placement: Option<InlinePlacement>,
}

impl SourceBlock {
    pub fn is_top_level(&self) -> bool {
        self.secondary_id == 0
    }
}

/// `INLINE (...) id{p,s} AS <secondary> AT <parent:offset>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlinePlacement {
    pub secondary_id: u32,

    /// Secondary id of the parent copy, zero when the parent is the top-level version
    pub parent_id: u32,

    /// UTF-16 offset within the parent's source text
    pub offset: usize,
}

/// One `begin_compilation` block from the IR log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrBlock {
    pub file: String,
    pub name: String,
    pub primary_id: u32,
    pub changes: Vec<ChangeAnnotation>,
}

/// A runtime-call instruction line carrying a source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAnnotation {
    /// Instruction mnemonic, e.g. `CallWithDescriptor`
    pub tag: String,
    pub position: ChangePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePosition {
    /// Offset into the top-level version's source
    TopLevel(usize),

    /// Offset into the source of inline copy `secondary_id`
    Inlined { secondary_id: u32, offset: usize },
}

/// `Did not inline <callee> called from <caller> (<reason>).`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefusalNotice {
    pub callee: String,
    pub caller: String,
    pub reason: String,
}
