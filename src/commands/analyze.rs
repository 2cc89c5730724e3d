//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the three trace files
//! 2. Builds the model
//! 3. Renders the annotated document
//! 4. Writes output files

use super::models::AnalyzeArgs;
use super::utils::print_summary;
use crate::model::{build_model, TraceInputs};
use crate::output::{render_document, summarize, write_document, write_summary};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - called from main.rs and after a capture
///
/// # Errors
/// * Missing or unreadable trace files
/// * Malformed or inconsistent trace text
/// * File write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing traces in: {}", args.dir.display());

    // Step 1: Read inputs
    info!("Step 1/4: Reading trace files...");
    let source_dump = read_input(&args.source_dump_path())?;
    let ir_log = read_input(&args.ir_log_path())?;
    let engine_output = read_input(&args.engine_output_path())?;

    // Step 2: Build model
    info!("Step 2/4: Building model...");
    let model = build_model(&TraceInputs {
        source_dump: &source_dump,
        ir_log: &ir_log,
        engine_output: &engine_output,
    })
    .context("Failed to build model from trace files")?;

    // Step 3: Render
    info!("Step 3/4: Rendering document...");
    let html = render_document(&model);
    debug!("Rendered {} bytes of markup", html.len());

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    write_document(&html, &args.output_html).context("Failed to write document")?;
    info!("✓ Document written to: {}", args.output_html.display());

    if args.output_json.is_some() || args.print_summary {
        let summary = summarize(&model);

        if let Some(path) = &args.output_json {
            write_summary(&summary, path).context("Failed to write summary JSON")?;
            info!("✓ Summary written to: {}", path.display());
        }

        if args.print_summary {
            print_summary(&summary);
        }
    }

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
