mod common;

use jit_trace_studio::parser::{
    is_environment_reason, parse_ir_log, parse_refusals, parse_source_dump, ChangePosition,
    InlinePlacement,
};
use jit_trace_studio::utils::error::{ParseError, Stream};

#[test]
fn test_fixture_source_blocks() {
    let blocks = parse_source_dump(common::SOURCE_DUMP).unwrap();

    assert_eq!(blocks.len(), 5);
    let names: Vec<_> = blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["main", "add", "sq", "helper", "main"]);

    assert!(blocks[0].is_top_level());
    assert_eq!(
        blocks[2].placement,
        Some(InlinePlacement {
            secondary_id: 2,
            parent_id: 1,
            offset: 15
        })
    );
    assert_eq!(blocks[3].deopts, vec!["Insufficient type feedback".to_string()]);
    assert_eq!(blocks[4].primary_id, 3);
}

#[test]
fn test_block_without_leading_delimiter() {
    let blocks = parse_source_dump("(a.js:foo) id{1,0} ---\nx < y\n--- END ---").unwrap();
    assert_eq!(blocks[0].code, "x < y");
}

#[test]
fn test_fixture_ir_blocks() {
    let blocks = parse_ir_log(common::IR_LOG).unwrap();

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].name, "main");
    assert_eq!(blocks[0].changes.len(), 2);
    assert_eq!(blocks[0].changes[0].position, ChangePosition::TopLevel(45));
    assert_eq!(
        blocks[0].changes[1].position,
        ChangePosition::Inlined {
            secondary_id: 2,
            offset: 12
        }
    );
    assert!(blocks[1].changes.is_empty());
}

#[test]
fn test_fixture_refusals() {
    let notices = parse_refusals(common::ENGINE_OUTPUT);

    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].callee, "helper");
    assert_eq!(notices[0].reason, "target not inlineable");
    assert_eq!(notices[1].callee, "missing");
}

#[test]
fn test_environment_reasons() {
    assert!(is_environment_reason("target is recursive"));
    assert!(is_environment_reason("inline depth limit reached"));
    assert!(is_environment_reason("cumulative AST node limit reached"));
    assert!(!is_environment_reason("target not inlineable"));
}

#[test]
fn test_stray_text_before_first_block_is_fatal() {
    let text = "garbage\n--- FUNCTION SOURCE (a.js:f) id{1,0} ---\nx\n--- END ---\n";
    assert!(matches!(
        parse_source_dump(text),
        Err(ParseError::MalformedHeader {
            stream: Stream::SourceDump,
            ..
        })
    ));
}

#[test]
fn test_missing_end_marker_is_fatal() {
    let text = "--- FUNCTION SOURCE (a.js:f) id{1,0} ---\nx\n";
    assert!(parse_source_dump(text).is_err());
}
