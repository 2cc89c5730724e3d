//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod capture;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::execute_analyze;
pub use capture::{build_engine_command, execute_capture, run_engine, validate_args};
pub use models::{AnalyzeArgs, CaptureArgs};
pub use utils::{display_version, print_summary, validate_summary_file};
