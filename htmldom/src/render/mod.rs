//! HTML serialization.

use crate::document::Document;
use crate::element::{Content, Element};

/// Elements that never have content and are written as `<tag/>`.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escapes a string for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    if let Some(id) = &el.id {
        out.push_str(&format!(r#" id="{}""#, escape_html(id)));
    }
    for (name, value) in &el.attrs {
        out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
    }

    if is_void(&el.tag) {
        out.push_str("/>");
        return;
    }
    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
        Content::Html(markup) => out.push_str(markup),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str(&format!("</{}>", el.tag));
}

/// Serialize a single element and its subtree.
pub fn render_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(el, &mut out);
    out
}

/// Serialize a full document, including doctype and head.
pub fn render_document(doc: &Document) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    match &doc.lang {
        Some(lang) => html.push_str(&format!("<html lang=\"{}\">\n", escape_html(lang))),
        None => html.push_str("<html>\n"),
    }
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if let Some(title) = &doc.title {
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    html.push_str("</head>\n");
    write_element(&doc.body, &mut html);
    html.push_str("\n</html>\n");

    log::debug!(
        "[render] document serialized: {} bytes, title={:?}",
        html.len(),
        doc.title
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("O'Brien & Co"), "O&#39;Brien &amp; Co");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_void_element() {
        let el = Element::new("input").attr("type", "text");
        assert_eq!(render_element(&el), r#"<input type="text"/>"#);
    }

    #[test]
    fn test_text_is_escaped_html_is_not() {
        let text = Element::text("p", "<i>");
        assert_eq!(render_element(&text), "<p>&lt;i&gt;</p>");

        let raw = Element::div().html("<i>x</i>");
        assert_eq!(render_element(&raw), "<div><i>x</i></div>");
    }
}
