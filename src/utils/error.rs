//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::fmt;
use thiserror::Error;

/// Which of the three input streams a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    SourceDump,
    IrLog,
    EngineOutput,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stream::SourceDump => "source dump",
            Stream::IrLog => "IR log",
            Stream::EngineOutput => "engine output",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while scanning the raw trace text
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed {stream} block header: {snippet:?}")]
    MalformedHeader { stream: Stream, snippet: String },

    #[error("Invalid number {value:?} in {stream} block")]
    InvalidNumber { stream: Stream, value: String },
}

/// Errors raised when a record names an entity no earlier pass established
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No file: {0}")]
    UnknownFile(String),

    #[error("No function {name} in {file}")]
    UnknownFunction { file: String, name: String },

    #[error("No compiled version {id} in {file}")]
    UnknownVersion { file: String, id: u32 },

    #[error("No inline copy {secondary_id} in compiled version {owner_id}")]
    UnknownInline { owner_id: u32, secondary_id: u32 },

    #[error("No inline parent {parent_id} in compiled version {owner_id}")]
    UnknownInlineParent { owner_id: u32, parent_id: u32 },

    #[error("Inline copy {secondary_id} registered twice in compiled version {owner_id}")]
    DuplicateInline { owner_id: u32, secondary_id: u32 },

    #[error("Inline copy {0} is attached to more than one parent")]
    SharedInline(usize),
}

/// Errors that can occur while building the model from the three streams
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while running the traced engine
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to launch {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Traced process exited abnormally ({status}): {stderr}")]
    AbnormalExit { status: String, stderr: String },
}
