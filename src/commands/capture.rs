//! Capture command implementation.
//!
//! The capture command:
//! 1. Runs the engine with the trace flags
//! 2. Saves its console output next to the trace files
//! 3. Analyzes the result

use super::analyze::execute_analyze;
use super::models::CaptureArgs;
use crate::utils::config::TRACE_FLAGS;
use crate::utils::error::CaptureError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::process::Command;

/// Program and arguments of the traced run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Build the traced command line: trace flags first, then the script
pub fn build_engine_command(engine: &str, script_args: &[String]) -> EngineCommandSpec {
    EngineCommandSpec {
        program: engine.to_string(),
        args: TRACE_FLAGS
            .iter()
            .map(|flag| flag.to_string())
            .chain(script_args.iter().cloned())
            .collect(),
    }
}

/// Execute the capture command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * The engine cannot be launched or exits abnormally; nothing is parsed then
/// * Any error of the analyze step
pub fn execute_capture(args: CaptureArgs) -> Result<()> {
    info!("Step 1/2: Running traced engine...");
    let output = run_engine(&args).context("Traced run failed")?;

    let out_path = args.analyze.engine_output_path();
    fs::write(&out_path, output)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    info!("✓ Engine output written to: {}", out_path.display());

    info!("Step 2/2: Analyzing traces...");
    execute_analyze(&args.analyze)
}

/// Run the engine in the trace directory and return stdout followed by stderr
///
/// **Public** - blocks until the process exits
pub fn run_engine(args: &CaptureArgs) -> Result<String, CaptureError> {
    let spec = build_engine_command(&args.engine, &args.script_args);
    debug!("Running {} {}", spec.program, spec.args.join(" "));

    let output = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&args.analyze.dir)
        .output()
        .map_err(|source| CaptureError::SpawnFailed {
            program: spec.program.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(CaptureError::AbnormalExit {
            status: output.status.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(format!("{}{}", stdout, stderr))
}

/// Validate capture arguments
///
/// **Public** - can be called before execute_capture for early validation
pub fn validate_args(args: &CaptureArgs) -> Result<()> {
    if args.engine.trim().is_empty() {
        anyhow::bail!("Engine binary cannot be empty");
    }

    if args.script_args.is_empty() {
        anyhow::bail!("No script given to run under the trace flags");
    }

    if !args.analyze.dir.is_dir() {
        anyhow::bail!(
            "Trace directory does not exist: {}",
            args.analyze.dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::AnalyzeArgs;

    fn args_in(dir: &std::path::Path, engine: &str, script: &[&str]) -> CaptureArgs {
        CaptureArgs {
            engine: engine.to_string(),
            script_args: script.iter().map(|s| s.to_string()).collect(),
            analyze: AnalyzeArgs {
                dir: dir.to_path_buf(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_build_engine_command() {
        let spec = build_engine_command("node", &["app.js".to_string(), "--fast".to_string()]);

        assert_eq!(spec.program, "node");
        assert_eq!(spec.args.len(), TRACE_FLAGS.len() + 2);
        assert_eq!(spec.args[0], "--trace-inlining");
        assert!(spec.args.contains(&"--trace_hydrogen_file=hg.cfg".to_string()));
        assert_eq!(spec.args[spec.args.len() - 2..], ["app.js", "--fast"]);
    }

    #[test]
    fn test_validate_args() {
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(validate_args(&args_in(temp_dir.path(), "node", &["app.js"])).is_ok());
        assert!(validate_args(&args_in(temp_dir.path(), "", &["app.js"])).is_err());
        assert!(validate_args(&args_in(temp_dir.path(), "node", &[])).is_err());
        assert!(validate_args(&args_in(&temp_dir.path().join("missing"), "node", &["a.js"])).is_err());
    }

    #[test]
    fn test_missing_engine_is_spawn_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = args_in(temp_dir.path(), "definitely-not-an-engine-binary", &["app.js"]);

        assert!(matches!(
            run_engine(&args),
            Err(CaptureError::SpawnFailed { .. })
        ));
    }
}
