//! Entity graph reconstructed from a traced run.
//!
//! - `entities`: arena of files, functions and compiled versions
//! - `resolver`: lookups by path, name, compiled-version id and inline id
//! - `builder`: the ordered pass over the three streams

pub mod builder;
pub mod entities;
pub mod resolver;

pub use builder::{build_model, TraceInputs};
pub use entities::{
    FileId, Function, FunctionId, FunctionVersion, InlineSite, Model, RuntimeCall, SourceFile,
    VersionId, VersionKind,
};
