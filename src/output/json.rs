//! JSON summary writer.
//!
//! Writes TraceSummary structs to JSON files with proper formatting.

use super::summary::TraceSummary;
use super::validate_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &TraceSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary written: {} functions, {} versions",
        summary.function_count(),
        summary.version_count()
    );

    Ok(())
}

/// Read a summary from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<TraceSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: TraceSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: version {}, {} files",
        summary.version,
        summary.files.len()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::summary::{FileSummary, FunctionSummary, VersionSummary};
    use tempfile::NamedTempFile;

    fn create_test_summary() -> TraceSummary {
        TraceSummary {
            version: "1.0.0".to_string(),
            files: vec![FileSummary {
                path: "app.js".to_string(),
                functions: vec![FunctionSummary {
                    name: "foo".to_string(),
                    deopted: true,
                    versions: vec![VersionSummary {
                        id: 1,
                        inlined_calls: 2,
                        runtime_calls: 3,
                        deopts: vec!["wrong map".to_string()],
                    }],
                    did_not_inline: None,
                }],
            }],
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded, summary);
        assert_eq!(loaded.deopt_count(), 1);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&create_test_summary(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();

        assert!(matches!(
            read_summary(temp_file.path()),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
