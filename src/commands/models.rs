use crate::utils::config::{
    DEFAULT_ENGINE, DOCUMENT_FILE, ENGINE_OUTPUT_FILE, IR_LOG_FILE, SOURCE_DUMP_FILE,
};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory holding code.asm, hg.cfg and out.txt
    pub dir: PathBuf,

    /// Output path for the annotated document
    pub output_html: PathBuf,

    /// Output path for the JSON summary (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            output_html: PathBuf::from(DOCUMENT_FILE),
            output_json: None,
            print_summary: false,
        }
    }
}

impl AnalyzeArgs {
    pub fn source_dump_path(&self) -> PathBuf {
        self.dir.join(SOURCE_DUMP_FILE)
    }

    pub fn ir_log_path(&self) -> PathBuf {
        self.dir.join(IR_LOG_FILE)
    }

    pub fn engine_output_path(&self) -> PathBuf {
        self.dir.join(ENGINE_OUTPUT_FILE)
    }
}

/// Arguments for the capture command
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Engine binary to run under the trace flags
    pub engine: String,

    /// Script and its arguments, passed after the trace flags
    pub script_args: Vec<String>,

    /// Where the trace files land and how to analyze them afterwards
    pub analyze: AnalyzeArgs,
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            script_args: Vec::new(),
            analyze: AnalyzeArgs::default(),
        }
    }
}
