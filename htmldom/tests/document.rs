use htmldom::{find_element, render_document, render_element, Content, Document, Element};

fn page() -> Document {
    Document::new().with_title("Contact").with_body(
        Element::body().child(
            Element::new("main")
                .id("main")
                .child(Element::text("h1", "Contact us"))
                .child(Element::form().id("form").attr("method", "post")),
        ),
    )
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_find_nested_element() {
    let doc = page();
    let form = doc.get_element_by_id("form").expect("form should be found");
    assert_eq!(form.tag, "form");
    assert_eq!(form.get_attr("method"), Some("post"));
}

#[test]
fn test_find_missing_element() {
    let doc = page();
    assert!(doc.get_element_by_id("nope").is_none());
    assert!(find_element(&doc.body, "").is_none());
}

#[test]
fn test_lookup_does_not_descend_into_raw_html() {
    let mut doc = page();
    doc.get_element_by_id_mut("main")
        .unwrap()
        .set_inner_html(r#"<div id="inner"></div>"#);

    assert!(doc.get_element_by_id("inner").is_none());
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[test]
fn test_set_inner_html_replaces_children() {
    let mut doc = page();
    let main = doc.get_element_by_id_mut("main").unwrap();
    main.set_inner_html("<p>replaced</p>");

    assert_eq!(main.content, Content::Html("<p>replaced</p>".to_string()));
    assert_eq!(render_element(main), r#"<main id="main"><p>replaced</p></main>"#);
    assert!(doc.get_element_by_id("form").is_none());
}

#[test]
fn test_set_attr_overwrites() {
    let el = Element::div().attr("class", "a").attr("class", "b");
    assert_eq!(el.attrs.len(), 1);
    assert_eq!(el.get_attr("class"), Some("b"));
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_render_document_shape() {
    let html = render_document(&page().with_lang("ja"));

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">"));
    assert!(html.contains("<meta charset=\"utf-8\">"));
    assert!(html.contains("<title>Contact</title>"));
    assert!(html.contains(
        r#"<body><main id="main"><h1>Contact us</h1><form id="form" method="post"></form></main></body>"#
    ));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_render_is_deterministic() {
    let doc = page();
    assert_eq!(render_document(&doc), render_document(&doc));
}

#[test]
fn test_attribute_values_are_escaped() {
    let el = Element::new("input").attr("placeholder", "say \"hi\" <now>");
    assert_eq!(
        render_element(&el),
        r#"<input placeholder="say &quot;hi&quot; &lt;now&gt;"/>"#
    );
}
