//! Option types for choice and select fields

use serde::Deserialize;
use serde::Serialize;

/// One entry of a radio or checkbox group.
///
/// The numeric value is what a submitted form carries. The label is the
/// text shown next to the control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: i32,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<S: Into<String>> From<(S, i32)> for ChoiceOption {
    fn from((label, value): (S, i32)) -> Self {
        Self::new(label, value)
    }
}

/// One `<option>` of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: i32,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: i32) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

impl<S: Into<String>> From<(S, i32)> for SelectOption {
    fn from((text, value): (S, i32)) -> Self {
        Self::new(text, value)
    }
}
