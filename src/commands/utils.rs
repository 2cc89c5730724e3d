use crate::output::{read_summary, TraceSummary};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

/// Validate a summary JSON file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Generated: {}", summary.generated_at);
    println!("  Files: {}", summary.files.len());
    println!("  Functions: {}", summary.function_count());
    println!("  Compiled versions: {}", summary.version_count());
    println!("  Deopts: {}", summary.deopt_count());

    Ok(())
}

/// Print a text summary of a run to stdout
pub fn print_summary(summary: &TraceSummary) {
    println!("\n{}", "=".repeat(80));
    println!("{}", "TRACE SUMMARY".bold());
    println!("{}", "=".repeat(80));
    println!("Files:             {}", summary.files.len());
    println!("Functions:         {}", summary.function_count());
    println!("Compiled versions: {}", summary.version_count());
    println!("Deopts:            {}", summary.deopt_count());

    let deopted: Vec<_> = summary.functions().filter(|f| f.deopted).collect();
    if !deopted.is_empty() {
        println!("\n{}", "Deoptimized functions:".red().bold());
        for function in deopted {
            println!("  {} ({} versions)", function.name.red(), function.versions.len());
            for reason in function.versions.iter().flat_map(|v| &v.deopts) {
                println!("    - {}", reason);
            }
        }
    }

    let refused: Vec<_> = summary
        .functions()
        .filter_map(|f| f.did_not_inline.as_ref().map(|r| (&f.name, r)))
        .collect();
    if !refused.is_empty() {
        println!("\n{}", "Not inlined:".yellow().bold());
        for (name, reason) in refused {
            println!("  {}: {}", name.yellow(), reason);
        }
    }

    println!("{}", "=".repeat(80));
}

/// Display version information
pub fn display_version() {
    println!("JIT Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Explore inlining, runtime calls and deoptimizations in optimizing-JIT traces.");
}
