mod common;

use jit_trace_studio::output::{
    read_summary, render_document, summarize, validate_path, write_document, write_summary,
};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_document_structure() {
    let model = common::fixture_model();
    let html = render_document(&model);

    assert!(html.starts_with(r#"<meta charset="UTF-8"><style>"#));
    assert!(html.contains(r#"<div class="file-item"><div class="file-name toggle-next">app.js</div>"#));
    assert!(html.contains(r##"<div class="fn-item"><a class="fn-name" href="#main" id="main">main:</a>"##));
    assert!(html.contains(r##"<div class="fn-item fn-deopt"><a class="fn-name" href="#helper" id="helper">helper:</a>"##));
    assert!(html.contains(r#"<div class="deopt">Deopt: Insufficient type feedback</div>"#));
}

#[test]
fn test_only_latest_version_expanded() {
    let model = common::fixture_model();
    let html = render_document(&model);

    let older = format!(r#"<div class="hidden">{}</div>"#, common::MAIN_V1_HTML);
    let latest = r#"<div class=""><div class="code">(x){ return x; }</div></div>"#;
    assert!(html.contains(&older));
    assert!(html.contains(latest));
    assert_eq!(html.matches("~recompile~").count(), 2);

    // helper has a single version: expanded, no recompile toggle
    assert!(html.contains(r#"<div class=""><div class="code">(x){ return x &gt; 1; }</div></div>"#));
}

#[test]
fn test_functions_follow_file_order() {
    let html = render_document(&common::fixture_model());
    let main = html.find(r#"id="main""#).unwrap();
    let helper = html.find(r#"id="helper""#).unwrap();
    assert!(main < helper);
}

#[test]
fn test_summary_counts() {
    let summary = summarize(&common::fixture_model());

    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.function_count(), 2);
    assert_eq!(summary.version_count(), 3);
    assert_eq!(summary.deopt_count(), 1);

    let main = &summary.files[0].functions[0];
    assert_eq!(main.name, "main");
    assert_eq!(main.versions[0].id, 1);
    assert_eq!(main.versions[0].inlined_calls, 2);
    assert_eq!(main.versions[0].runtime_calls, 2);
    assert_eq!(main.versions[1].id, 3);
    assert_eq!(main.versions[1].inlined_calls, 0);

    let helper = &summary.files[0].functions[1];
    assert!(helper.deopted);
    assert_eq!(helper.did_not_inline.as_deref(), Some("target not inlineable"));
}

#[test]
fn test_write_and_read_summary() {
    let summary = summarize(&common::fixture_model());
    let temp_file = NamedTempFile::new().unwrap();

    write_summary(&summary, temp_file.path()).unwrap();
    let loaded = read_summary(temp_file.path()).unwrap();

    assert_eq!(loaded, summary);
}

#[test]
fn test_write_document_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/ir.html");

    write_document("<p>hi</p>", &nested_path).unwrap();

    assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), "<p>hi</p>");
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
    assert!(write_document("x", temp_dir.path()).is_err());
}
