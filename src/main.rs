//! JIT Trace Studio CLI
//!
//! Runs a script under the engine's trace flags, or analyzes trace files
//! captured earlier, and writes an annotated-source document.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use jit_trace_studio::commands::{
    display_version, execute_analyze, execute_capture, validate_args, validate_summary_file,
    AnalyzeArgs, CaptureArgs,
};
use jit_trace_studio::utils::config::{DEFAULT_ENGINE, DOCUMENT_FILE};

/// JIT Trace Studio - inlining and deoptimization explorer
#[derive(Parser, Debug)]
#[command(name = "jit-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every command that produces a document
#[derive(Args, Debug)]
struct OutputOpts {
    /// Directory holding (or receiving) code.asm, hg.cfg and out.txt
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Output path for the annotated document (relative names land in --dir)
    #[arg(short, long, default_value = DOCUMENT_FILE)]
    output: PathBuf,

    /// Output path for a JSON summary of the run
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

impl OutputOpts {
    fn into_analyze_args(self) -> AnalyzeArgs {
        // Bare file names go next to the trace files
        let output_html = if self
            .output
            .parent()
            .map(|p| p.as_os_str().is_empty())
            .unwrap_or(true)
        {
            self.dir.join(&self.output)
        } else {
            self.output
        };

        AnalyzeArgs {
            dir: self.dir,
            output_html,
            output_json: self.summary_json,
            print_summary: self.summary,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a script under the trace flags, then analyze the traces
    Capture {
        /// Engine binary
        #[arg(long, default_value = DEFAULT_ENGINE, env = "JIT_TRACE_ENGINE")]
        engine: String,

        #[command(flatten)]
        output: OutputOpts,

        /// Script and its arguments
        #[arg(last = true, required = true)]
        script: Vec<String>,
    },

    /// Analyze trace files captured earlier
    Analyze {
        #[command(flatten)]
        output: OutputOpts,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Capture {
            engine,
            output,
            script,
        } => {
            let args = CaptureArgs {
                engine,
                script_args: script,
                analyze: output.into_analyze_args(),
            };

            // Validate args first
            validate_args(&args)?;

            execute_capture(args)?;
        }

        Commands::Analyze { output } => {
            execute_analyze(&output.into_analyze_args())?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
