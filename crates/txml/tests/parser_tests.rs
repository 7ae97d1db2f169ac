//! Integration tests for TXML parsing, fallback and round-tripping.

use txml::{
    Element, ElementBuilder, MAX_DEPTH, Node, Tag, TxmlParseError, ValidationCode, Validator,
    parse_txml, to_txml, try_parse_txml,
};

fn lenient(source: &str) -> Result<Element, TxmlParseError> {
    try_parse_txml(source, &Validator::lenient())
}

fn first_child(element: &Element) -> &Element {
    element.child_elements().next().expect("element child")
}

// ============================================================================
// DOCUMENT STRUCTURE
// ============================================================================

#[test]
fn test_parse_minimal_document() {
    let root = lenient("<App />").unwrap();
    assert_eq!(root.kind(), Tag::App);
    assert!(root.children.is_empty());
}

#[test]
fn test_parse_nested_document() {
    let root = lenient(
        r#"
        <App>
          <Body>
            <Window title="T" width="300">
              <Text>Hi</Text>
              <Button onClick="save" id="ok">Save</Button>
            </Window>
          </Body>
        </App>
        "#,
    )
    .unwrap();

    let window = first_child(first_child(&root));
    assert_eq!(window.kind(), Tag::Window);
    assert_eq!(window.attr("title"), Some("T"));
    assert_eq!(window.attr("width"), Some("300"));

    let kids: Vec<_> = window.child_elements().collect();
    assert_eq!(kids.len(), 2);
    assert_eq!(kids[0].text_content(), "Hi");
    assert_eq!(kids[1].id(), Some("ok"));
    assert_eq!(kids[1].attr("onClick"), Some("save"));
}

#[test]
fn test_single_quoted_attributes() {
    let root = lenient("<App><Window title='It \"works\"' /></App>").unwrap();
    assert_eq!(first_child(&root).attr("title"), Some("It \"works\""));
}

#[test]
fn test_comments_are_skipped() {
    let root = lenient("<App><!-- header --><Body /><!-- footer --></App>").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(first_child(&root).kind(), Tag::Body);
}

#[test]
fn test_whitespace_only_text_is_dropped() {
    let root = lenient("<App>\n   <Body>   </Body>\n</App>").unwrap();
    let body = first_child(&root);
    assert!(body.children.is_empty());
}

#[test]
fn test_entities_are_decoded() {
    let root = lenient(r#"<App><Text content="&lt;b&gt;">Tom &amp; Jerry</Text></App>"#).unwrap();
    let text = first_child(&root);
    assert_eq!(text.attr("content"), Some("<b>"));
    assert_eq!(text.children, vec![Node::Text("Tom & Jerry".into())]);
}

#[test]
fn test_unknown_tags_are_kept_in_lenient_mode() {
    let root = lenient("<App><Marquee speed=\"3\" /></App>").unwrap();
    let marquee = first_child(&root);
    assert_eq!(marquee.kind(), Tag::Unknown);
    assert_eq!(marquee.tag, "Marquee");
}

// ============================================================================
// STRUCTURAL ERRORS
// ============================================================================

#[test]
fn test_document_must_start_with_angle() {
    let err = lenient("App").unwrap_err();
    assert_eq!(err, TxmlParseError::ExpectedOpenAngle { line: 1, column: 1 });
}

#[test]
fn test_root_must_be_app() {
    let err = lenient("<Window />").unwrap_err();
    assert_eq!(
        err,
        TxmlParseError::InvalidRoot {
            found: "Window".into()
        }
    );
}

#[test]
fn test_trailing_content_is_rejected() {
    let err = lenient("<App />\n<App />").unwrap_err();
    assert!(matches!(err, TxmlParseError::TrailingContent { line: 2, .. }));
}

#[test]
fn test_unquoted_attribute_is_rejected() {
    let err = lenient("<App><Window title=T /></App>").unwrap_err();
    assert!(matches!(err, TxmlParseError::UnquotedAttributeValue { .. }));
}

#[test]
fn test_unclosed_attribute_value() {
    let err = lenient("<App title=\"oops></App>").unwrap_err();
    assert!(matches!(err, TxmlParseError::UnclosedAttributeValue { .. }));
}

#[test]
fn test_closing_tags_are_case_sensitive() {
    let err = lenient("<App><Body></body></App>").unwrap_err();
    assert!(matches!(
        err,
        TxmlParseError::MismatchedClosingTag { ref found, .. } if found == "body"
    ));
}

// ============================================================================
// STRICT VALIDATION
// ============================================================================

#[test]
fn test_strict_mode_rejects_unknown_tag() {
    let err = try_parse_txml("<App><Marquee /></App>", &Validator::strict()).unwrap_err();
    match err {
        TxmlParseError::Validation(err) => assert_eq!(err.code, ValidationCode::InvalidTag),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_strict_mode_rejects_bad_handler_name() {
    let err = try_parse_txml(
        r#"<App><Button onClick="alert(1)">x</Button></App>"#,
        &Validator::strict(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TxmlParseError::Validation(ref e) if e.code == ValidationCode::InvalidAttributeValue
    ));
}

#[test]
fn test_strict_mode_rejects_dangerous_text() {
    let err = try_parse_txml(
        "<App><Text>javascript:void(0)</Text></App>",
        &Validator::strict(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TxmlParseError::Validation(ref e) if e.code == ValidationCode::InvalidTextContent
    ));
}

// ============================================================================
// FALLBACK
// ============================================================================

#[test]
fn test_fallback_tree_on_unclosed_element() {
    let root = parse_txml("<Window>unclosed");
    assert_eq!(root.kind(), Tag::App);

    let body = first_child(&root);
    assert_eq!(body.kind(), Tag::Body);
    let window = first_child(body);
    assert_eq!(window.attr("title"), Some("Error"));
    let text = first_child(window);
    assert_eq!(text.kind(), Tag::Text);
    assert!(text.text_content().starts_with("TXML Parse Error: "));
}

#[test]
fn test_fallback_tree_on_empty_input() {
    let root = parse_txml("   ");
    assert_eq!(root.kind(), Tag::App);
    assert!(to_txml(&root).contains("TXML Parse Error: expected document to start with"));
}

#[test]
fn test_fallback_tree_on_deep_nesting() {
    let levels = 10_000;
    let markup = format!(
        "<App>{}{}</App>",
        "<Body>".repeat(levels),
        "</Body>".repeat(levels)
    );

    let err = lenient(&markup).unwrap_err();
    assert!(matches!(err, TxmlParseError::TooDeep { max: MAX_DEPTH, line: 1, .. }));

    let root = parse_txml(&markup);
    let window = first_child(first_child(&root));
    assert_eq!(window.attr("title"), Some("Error"));
    assert!(
        first_child(window)
            .text_content()
            .starts_with("TXML Parse Error: elements nested deeper than 256 levels")
    );
}

#[test]
fn test_nesting_at_the_limit_parses() {
    let levels = MAX_DEPTH - 1;
    let markup = format!(
        "<App>{}{}</App>",
        "<Body>".repeat(levels),
        "</Body>".repeat(levels)
    );

    let root = lenient(&markup).unwrap();
    let mut element = &root;
    let mut depth = 1;
    while let Some(child) = element.child_elements().next() {
        element = child;
        depth += 1;
    }
    assert_eq!(depth, MAX_DEPTH);
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_builder_tree_round_trips_through_markup() {
    let tree = ElementBuilder::new("App")
        .child(
            ElementBuilder::new("Body").child(
                ElementBuilder::new("Window")
                    .attr("title", "Quotes \"&\" <brackets>")
                    .attr("width", 320)
                    .children([
                        ElementBuilder::new("Text")
                            .attr("className", "lead")
                            .text("it's 1 < 2 & 3 > 2"),
                        ElementBuilder::new("InputText")
                            .attr("label", "Name")
                            .attr("hint", "type 'here'"),
                        ElementBuilder::new("SliderFloat")
                            .attr("min", -1)
                            .attr("max", 1.5),
                        ElementBuilder::new("Checkbox").attr("label", "On"),
                        ElementBuilder::new("SameLine"),
                        ElementBuilder::new("Button")
                            .handler("onClick", "jsx_fn_1")
                            .text("Go"),
                    ]),
            ),
        )
        .build()
        .unwrap();

    let markup = to_txml(&tree);
    let parsed = try_parse_txml(&markup, &Validator::strict()).unwrap();
    assert_eq!(parsed, tree);
}
