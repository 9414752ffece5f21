//! Field descriptors

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::{ChoiceOption, SelectOption};

/// Subtype of a single-line `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-line text control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub placeholder: String,
}

/// A group of radio buttons or checkboxes sharing one `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceField {
    pub name: String,
    pub label: String,
    #[serde(rename = "values")]
    pub options: Vec<ChoiceOption>,
}

/// A dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectField {
    pub name: String,
    pub label: String,
    pub options: Vec<SelectOption>,
}

/// A multi-line text control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAreaField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
}

/// One row of a rendered form.
///
/// Serialized with a `kind` tag:
///
/// ```
/// use tableform_lib::FieldDescriptor;
///
/// let field: FieldDescriptor = serde_json::from_str(
///     r#"{"kind":"input","name":"tel","label":"Phone","type":"tel","placeholder":""}"#,
/// )
/// .unwrap();
/// assert_eq!(field.kind(), "input");
/// assert_eq!(field.name(), "tel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldDescriptor {
    Input(InputField),
    /// Exactly one option selectable.
    Radio(ChoiceField),
    /// Zero or more options selectable.
    Checkbox(ChoiceField),
    Select(SelectField),
    TextArea(TextAreaField),
}

impl FieldDescriptor {
    pub fn input(
        name: impl Into<String>,
        label: impl Into<String>,
        input_type: InputType,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::Input(InputField {
            name: name.into(),
            label: label.into(),
            input_type,
            placeholder: placeholder.into(),
        })
    }

    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::input(name, label, InputType::Text, placeholder)
    }

    pub fn email(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::input(name, label, InputType::Email, placeholder)
    }

    pub fn tel(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::input(name, label, InputType::Tel, placeholder)
    }

    pub fn radio<O: Into<ChoiceOption>>(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::Radio(ChoiceField {
            name: name.into(),
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    pub fn checkbox<O: Into<ChoiceOption>>(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::Checkbox(ChoiceField {
            name: name.into(),
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    pub fn select<O: Into<SelectOption>>(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::Select(SelectField {
            name: name.into(),
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        })
    }

    pub fn textarea(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::TextArea(TextAreaField {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Input(f) => &f.name,
            Self::Radio(f) | Self::Checkbox(f) => &f.name,
            Self::Select(f) => &f.name,
            Self::TextArea(f) => &f.name,
        }
    }

    /// The serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Radio(_) => "radio",
            Self::Checkbox(_) => "checkbox",
            Self::Select(_) => "select",
            Self::TextArea(_) => "textarea",
        }
    }

    /// Number of options for choice and select fields, `None` otherwise.
    pub fn option_count(&self) -> Option<usize> {
        match self {
            Self::Radio(f) | Self::Checkbox(f) => Some(f.options.len()),
            Self::Select(f) => Some(f.options.len()),
            Self::Input(_) | Self::TextArea(_) => None,
        }
    }
}
