//! Configuration and constants for the CLI.
//!
//! The trace grammar is fixed: these values describe the one format the
//! scanner understands and are not meant to be tuned per run.

/// Current summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Source-dump stream (code.asm)
pub const SOURCE_BLOCK_DELIMITER: &str = "--- FUNCTION SOURCE ";
pub const SOURCE_END_MARKER: &str = "--- END ---";

// IR stream (hg.cfg), matched at the start of a line
pub const IR_BLOCK_DELIMITER: &str = "begin_compilation";

/// How far past an annotated position we look for the end of the expression,
/// in UTF-16 code units
pub const END_LOOKAHEAD_UNITS: usize = 100;

/// Span used when no expression can be recognised at the annotated position
pub const END_FALLBACK_UNITS: usize = 5;

/// Refusal reasons caused by the compilation environment rather than the callee.
/// A reason containing any of these is dropped.
pub const ENVIRONMENT_REFUSAL_REASONS: &[&str] = &["cumulative", "depth limit", "recursive"];

/// Call-kind tags that are presented as call-descriptor calls
pub const CALL_DESCRIPTOR_TAGS: &[&str] = &["CallWithDescriptor", "InvokeFunction", "CallRuntime"];

// Traced engine invocation
pub const DEFAULT_ENGINE: &str = "node";
pub const TRACE_FLAGS: &[&str] = &[
    "--trace-inlining",
    "--trace-hydrogen",
    "--trace-phase=Z",
    "--trace-deopt",
    "--hydrogen-track-positions",
    "--redirect-code-traces",
    "--redirect-code-traces-to=code.asm",
    "--trace_hydrogen_file=hg.cfg",
];

// File names inside the working directory
pub const SOURCE_DUMP_FILE: &str = "code.asm";
pub const IR_LOG_FILE: &str = "hg.cfg";
pub const ENGINE_OUTPUT_FILE: &str = "out.txt";
pub const DOCUMENT_FILE: &str = "ir.html";
