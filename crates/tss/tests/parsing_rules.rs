//! Integration tests for TSS stylesheet parsing.
//!
//! Covers:
//! - Rules and declarations
//! - Scope blocks and variables
//! - At-rules and comments
//! - Syntax errors with positions
//! - Strict-mode validation

use tss::parser::SimpleSelector;
use tss::{TssError, parse_tss, try_parse_tss};
use txml::{ValidationCode, Validator};

fn lenient(source: &str) -> Result<tss::StyleSheet, TssError> {
    try_parse_tss(source, &Validator::lenient())
}

// ============================================================================
// SIMPLE RULES
// ============================================================================

#[test]
fn test_rule_with_declarations() {
    let sheet = lenient("Window { text-color: 0xFFFFFFFF; width: 300; }").unwrap();
    assert_eq!(sheet.rules.len(), 1);

    let rule = &sheet.rules[0];
    assert_eq!(rule.selector, "Window");
    assert_eq!(rule.specificity, 1);
    assert_eq!(rule.properties["text-color"], "0xFFFFFFFF");
    assert_eq!(rule.properties["width"], "300");
}

#[test]
fn test_rules_keep_source_order() {
    let sheet = lenient("Text { width: 1; } .a { width: 2; } #b { width: 3; }").unwrap();
    let selectors: Vec<&str> = sheet.rules.iter().map(|r| r.selector.as_str()).collect();
    assert_eq!(selectors, vec!["Text", ".a", "#b"]);

    let specificities: Vec<u32> = sheet.rules.iter().map(|r| r.specificity).collect();
    assert_eq!(specificities, vec![1, 10, 100]);
}

#[test]
fn test_quoted_values_keep_spaces_and_newlines() {
    let sheet = lenient("Text { font-family: \"Fira Sans\"; content: 'a\nb'; }").unwrap();
    let rule = &sheet.rules[0];
    assert_eq!(rule.properties["font-family"], "Fira Sans");
    assert_eq!(rule.properties["content"], "a\nb");
}

#[test]
fn test_repeated_property_keeps_last_value() {
    let sheet = lenient("Button { width: 10; width: 20; }").unwrap();
    assert_eq!(sheet.rules[0].properties["width"], "20");
}

#[test]
fn test_empty_rule_body() {
    let sheet = lenient("Separator {}").unwrap();
    assert!(sheet.rules[0].properties.is_empty());
}

#[test]
fn test_compound_and_descendant_selectors() {
    let sheet = lenient("Window Button.primary#ok { width: 1; }").unwrap();
    let rule = &sheet.rules[0];
    assert_eq!(rule.specificity, 1 + 111);
    assert_eq!(rule.parsed.compounds.len(), 2);
    assert_eq!(
        rule.parsed.compounds[0].selectors,
        vec![SimpleSelector::Tag("Window".into())]
    );
}

// ============================================================================
// COMMENTS AND AT-RULES
// ============================================================================

#[test]
fn test_comments_are_whitespace() {
    let sheet = lenient(
        "/* header */\nButton /* sel */ {\n  /* inside */ width: /* v */ 10;\n}\n/* tail",
    )
    .unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].properties["width"], "10");
}

#[test]
fn test_at_rules_are_skipped() {
    let sheet = lenient(
        r#"
        @import "base.tss";
        @media (min-width: 100) { Button { width: 1; } Text { width: 2; } }
        Window { width: 3; }
        "#,
    )
    .unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].selector, "Window");
}

// ============================================================================
// VARIABLES
// ============================================================================

#[test]
fn test_scope_variables_are_substituted_at_parse_time() {
    let sheet = lenient(
        r#"
        scope {
            accent: 0xCC0000FF;
            Button { button-color: accent; }
        }
        "#,
    )
    .unwrap();
    assert_eq!(sheet.variables.get("accent"), Some("0xCC0000FF"));
    assert_eq!(sheet.rules[0].properties["button-color"], "0xCC0000FF");
}

#[test]
fn test_scope_variables_become_global_after_scope() {
    let sheet = lenient(
        r#"
        Text { text-color: ink; }
        scope { ink: 0x101010FF; }
        Button { text-color: ink; }
        "#,
    )
    .unwrap();
    // Declared after the first rule: left for the style engine to resolve.
    assert_eq!(sheet.rules[0].properties["text-color"], "ink");
    assert_eq!(sheet.rules[1].properties["text-color"], "0x101010FF");
}

#[test]
fn test_later_scope_sees_earlier_globals() {
    let sheet = lenient(
        r#"
        scope { base: 0x202020FF; }
        scope {
            panel: base;
            Window { widget-background-color: panel; }
        }
        "#,
    )
    .unwrap();
    assert_eq!(
        sheet.rules[0].properties["widget-background-color"],
        "0x202020FF"
    );
    assert_eq!(sheet.variables.len(), 2);
}

#[test]
fn test_redefined_variable_last_write_wins() {
    let sheet = lenient("scope { a: 1; } scope { a: 2; }").unwrap();
    assert_eq!(sheet.variables.get("a"), Some("2"));
}

#[test]
fn test_self_referencing_variable_terminates() {
    let sheet = lenient("scope { grow: \"grow grow\"; Text { content: grow; } }").unwrap();
    assert!(sheet.rules[0].properties["content"].starts_with("grow"));
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

fn syntax_error(source: &str) -> (String, usize, usize) {
    match lenient(source) {
        Err(TssError::InvalidSyntax {
            message,
            line,
            column,
        }) => (message, line, column),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_missing_semicolon() {
    let (message, line, column) = syntax_error("Button {\n  width: 10\n}");
    assert_eq!(message, "expected ';' after property value");
    assert_eq!((line, column), (3, 1));
}

#[test]
fn test_missing_colon() {
    let (message, _, _) = syntax_error("Button { width 10; }");
    assert_eq!(message, "expected ':' after property name");
}

#[test]
fn test_unclosed_rule() {
    let (message, _, _) = syntax_error("Button { width: 10;");
    assert_eq!(message, "expected '}' after declarations");
}

#[test]
fn test_missing_brace_after_selector() {
    let (message, _, _) = syntax_error("Button width: 10;");
    assert_eq!(message, "expected '{' after selector");
}

#[test]
fn test_empty_selector_is_rejected() {
    let (message, line, column) = syntax_error("\n\n  { width: 1; }");
    assert!(message.starts_with("invalid selector"));
    assert_eq!((line, column), (3, 3));
}

#[test]
fn test_unsupported_selector_is_rejected() {
    let (message, _, _) = syntax_error("Window > Button { width: 1; }");
    assert_eq!(message, "invalid selector 'Window > Button'");
}

#[test]
fn test_unclosed_scope() {
    let (message, _, _) = syntax_error("scope { a: 1;");
    assert_eq!(message, "expected '}' to close scope block");
}

#[test]
fn test_unterminated_quoted_value() {
    let (message, _, _) = syntax_error("Text { content: \"open; }");
    assert_eq!(message, "unterminated quoted value");
}

#[test]
fn test_parse_tss_returns_none_on_error() {
    assert!(parse_tss("Button {").is_none());
    assert!(parse_tss("").is_some_and(|sheet| sheet.rules.is_empty()));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_unknown_property_warns_in_lenient_mode() {
    let sheet = lenient("Button { sparkle: yes; }").unwrap();
    assert_eq!(sheet.rules[0].properties["sparkle"], "yes");
}

#[test]
fn test_unknown_property_fails_in_strict_mode() {
    let err = try_parse_tss("Button { sparkle: yes; }", &Validator::strict()).unwrap_err();
    match err {
        TssError::Validation(err) => assert_eq!(err.code, ValidationCode::InvalidTssProperty),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_invalid_color_fails_in_strict_mode() {
    let err = try_parse_tss("Text { text-color: blue; }", &Validator::strict()).unwrap_err();
    assert!(matches!(
        err,
        TssError::Validation(ref e) if e.code == ValidationCode::InvalidTssColor
    ));

    let ok = try_parse_tss(
        "scope { blue: 0x0000FFFF; Text { text-color: blue; } }",
        &Validator::strict(),
    );
    assert!(ok.is_ok());
}
