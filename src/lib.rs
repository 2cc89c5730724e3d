//! JIT Trace Studio
//!
//! Reconstructs which functions an optimizing JIT compiled, what it inlined
//! where, which call sites stayed runtime calls and why code deoptimized,
//! from the engine's diagnostic trace output. The result is rendered as one
//! annotated-source HTML document.
//!
//! Pipeline: `parser` (grammar scanner) → `model` (identity resolution and
//! entity graph) → `render` (span rendering) → `output` (document assembly).
//!
//! ```ignore
//! use jit_trace_studio::model::{build_model, TraceInputs};
//! use jit_trace_studio::output::render_document;
//!
//! let model = build_model(&TraceInputs { source_dump, ir_log, engine_output })?;
//! let html = render_document(&model);
//! ```

pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
