//! Per-shape row renderers.
//!
//! Every row is `<tr><th><label for="{name}">{label}</label></th><td>...</td></tr>`.
//! None of these validate their input: an empty name or option list yields
//! markup with empty attributes or an empty cell.

use super::interp;
use crate::config::RenderConfig;
use crate::model::{ChoiceField, InputField, SelectField, TextAreaField};

fn row(name: &str, label: &str, controls: &str) -> String {
    format!(
        r#"<tr><th><label for="{}">{}</label></th><td>{}</td></tr>"#,
        name, label, controls
    )
}

/// `<input>` with `type` text, email or tel.
pub fn input_row(field: &InputField, config: &RenderConfig) -> String {
    let name = interp(&field.name, config);
    let control = format!(
        r#"<input id="{}" name="{}" type="{}" placeholder="{}"/>"#,
        name,
        name,
        field.input_type,
        interp(&field.placeholder, config)
    );
    row(&name, &interp(&field.label, config), &control)
}

/// A radio or checkbox group. Each option gets the id `{name}{index}`.
pub fn choice_row(field: &ChoiceField, control_type: &str, config: &RenderConfig) -> String {
    let name = interp(&field.name, config);
    let controls: String = field
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            format!(
                r#"<input id="{0}{1}" name="{0}" type="{2}" value="{3}"/><label for="{0}{1}">{4}</label>"#,
                name,
                index,
                control_type,
                option.value,
                interp(&option.label, config)
            )
        })
        .collect();
    row(&name, &interp(&field.label, config), &controls)
}

/// `<select>` with one `<option>` per entry.
pub fn select_row(field: &SelectField, config: &RenderConfig) -> String {
    let name = interp(&field.name, config);
    let options: String = field
        .options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}">{}</option>"#,
                option.value,
                interp(&option.text, config)
            )
        })
        .collect();
    let control = format!(r#"<select id="{0}" name="{0}">{1}</select>"#, name, options);
    row(&name, &interp(&field.label, config), &control)
}

/// `<textarea>` with a placeholder.
pub fn textarea_row(field: &TextAreaField, config: &RenderConfig) -> String {
    let name = interp(&field.name, config);
    let control = format!(
        r#"<textarea id="{0}" name="{0}" placeholder="{1}"></textarea>"#,
        name,
        interp(&field.placeholder, config)
    );
    row(&name, &interp(&field.label, config), &control)
}
