//! Form table rendering.

mod rows;

use std::borrow::Cow;

use htmldom::escape_html;

use crate::config::RenderConfig;
use crate::model::FieldDescriptor;

pub use rows::{choice_row, input_row, select_row, textarea_row};

/// Interpolates `s` into markup, escaping it unless the config says verbatim.
fn interp<'a>(s: &'a str, config: &RenderConfig) -> Cow<'a, str> {
    if config.escape {
        Cow::Owned(escape_html(s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Renders one descriptor as a `<tr>` fragment.
pub fn render_row(field: &FieldDescriptor, config: &RenderConfig) -> String {
    match field {
        FieldDescriptor::Input(f) => input_row(f, config),
        FieldDescriptor::Radio(f) => choice_row(f, "radio", config),
        FieldDescriptor::Checkbox(f) => choice_row(f, "checkbox", config),
        FieldDescriptor::Select(f) => select_row(f, config),
        FieldDescriptor::TextArea(f) => textarea_row(f, config),
    }
}

/// Renders the full descriptor list as a single `<table>`, one row per
/// descriptor, in list order.
pub fn render_table(fields: &[FieldDescriptor], config: &RenderConfig) -> String {
    let rows: Vec<_> = fields.iter().map(|f| render_row(f, config)).collect();
    log::debug!(
        "[render] {} rows (escape={})",
        rows.len(),
        config.escape
    );
    format!("<table>{}</table>", rows.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_empty_table() {
        assert_eq!(render_table(&[], &RenderConfig::default()), "<table></table>");
    }

    #[test]
    fn test_rows_keep_input_order() {
        let fields = vec![
            FieldDescriptor::textarea("b", "B", ""),
            FieldDescriptor::text("a", "A", ""),
        ];
        let html = render_table(&fields, &RenderConfig::default());
        let b = html.find(r#"<label for="b">"#).unwrap();
        let a = html.find(r#"<label for="a">"#).unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_interp_respects_config() {
        assert_eq!(interp("a&b", &RenderConfig::default()), "a&amp;b");
        assert_eq!(interp("a&b", &RenderConfig::verbatim()), "a&b");
    }
}
