use rstest::rstest;
use tagtree::{parse, parse_with_options, Error, ErrorKind, ParseOptions};

#[test]
fn test_parse_mismatched_close_tag() {
    let options = ParseOptions::default().require_declaration(false);
    let err = parse_with_options("<a><b></a>", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StructuralMismatch);
    assert_eq!(
        err,
        Error::MismatchedCloseTag {
            expected: "b".to_string(),
            found: "a".to_string(),
            offset: 8,
        }
    );
}

#[test]
fn test_parse_mismatched_close_tag_after_declaration() {
    let err = parse("<?d?><a><b></a>").unwrap_err();
    assert!(matches!(err, Error::MismatchedCloseTag { .. }));
    assert_eq!(err.offset(), Some(13));
}

#[test]
fn test_close_tag_is_case_sensitive() {
    let err = parse("<?d?><a></A>").unwrap_err();
    assert!(matches!(err, Error::MismatchedCloseTag { .. }));
}

#[test]
fn test_close_tag_prefix_is_not_checked() {
    let doc = parse(r#"<?d?><x:a xmlns:x="urn:x"></y:a>"#).unwrap();
    assert_eq!(doc.root_element().prefix(), Some("x"));
}

#[test]
fn test_missing_declaration() {
    let err = parse("<a></a>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingDeclaration);
    assert_eq!(err, Error::MissingDeclaration { offset: 0 });
}

#[test]
fn test_malformed_declaration() {
    let err = parse(r#"<?xml version=1.0?><a/>"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingDeclaration);
    assert!(matches!(err, Error::MalformedDeclaration { offset: 0, .. }));
}

#[test]
fn test_empty_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err, Error::MissingDeclaration { offset: 0 });

    let options = ParseOptions::default().require_declaration(false);
    let err = parse_with_options("   ", &options).unwrap_err();
    assert_eq!(
        err,
        Error::StructuralMismatch {
            expected: "<",
            offset: 3
        }
    );
}

#[test]
fn test_declaration_without_root() {
    let err = parse("<?d?>").unwrap_err();
    assert_eq!(
        err,
        Error::StructuralMismatch {
            expected: "<",
            offset: 5
        }
    );
}

#[test]
fn test_only_text_after_declaration() {
    let err = parse("<?d?>abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StructuralMismatch);
    assert_eq!(err.offset(), Some(5));
}

#[test]
fn test_mixed_content() {
    let err = parse("<?d?><a>text<b/></a>").unwrap_err();
    assert_eq!(
        err,
        Error::StructuralMismatch {
            expected: "</",
            offset: 12
        }
    );
}

#[test]
fn test_nesting_limit() {
    let mut input = String::from("<?d?>");
    for _ in 0..300 {
        input.push_str("<a>");
    }
    for _ in 0..300 {
        input.push_str("</a>");
    }
    let err = parse(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);

    let options = ParseOptions::default().max_depth(300);
    let doc = parse_with_options(&input, &options).unwrap();
    assert_eq!(doc.len(), 300);
}

#[rstest]
#[case::unclosed_tag("<?d?><doc>", ErrorKind::UnterminatedValue)]
#[case::unclosed_header("<?d?><doc", ErrorKind::UnterminatedValue)]
#[case::unclosed_child("<?d?><doc><a></doc>", ErrorKind::StructuralMismatch)]
#[case::unterminated_value(r#"<?d?><doc a="1/>"#, ErrorKind::UnterminatedValue)]
#[case::unterminated_text("<?d?><doc>text", ErrorKind::UnterminatedValue)]
#[case::unterminated_close_tag("<?d?><doc></doc", ErrorKind::UnterminatedValue)]
#[case::missing_equals(r#"<?d?><doc a "1"/>"#, ErrorKind::StructuralMismatch)]
#[case::single_quotes("<?d?><doc a='1'/>", ErrorKind::StructuralMismatch)]
#[case::digit_name("<?d?><1doc/>", ErrorKind::InvalidName)]
#[case::digit_attribute(r#"<?d?><doc 1a="x"/>"#, ErrorKind::InvalidName)]
#[case::empty_local_name("<?d?><ns:/>", ErrorKind::InvalidName)]
#[case::empty_close_tag("<?d?><doc></>", ErrorKind::InvalidName)]
#[case::question_mark_end("<?d?><doc?>", ErrorKind::StructuralMismatch)]
#[case::trailing_element("<?d?><doc/><doc/>", ErrorKind::StructuralMismatch)]
#[case::missing_declaration("<doc/>", ErrorKind::MissingDeclaration)]
#[case::unclosed_declaration("<?d", ErrorKind::MissingDeclaration)]
fn test_error_kind(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind(), kind, "{}", err);
    assert!(err.offset().unwrap() <= input.len());
}
