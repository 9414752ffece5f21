//! Descriptor lint findings

/// A problem found in one field of a descriptor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// Position of the offending descriptor in the list.
    pub index: usize,
    /// The field's name, possibly empty.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Short machine-readable code.
    pub code: &'static str,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(
        index: usize,
        field: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field #{} '{}': {} ({})",
            self.index, self.field, self.message, self.code
        )
    }
}

impl std::error::Error for FieldValidationError {}
