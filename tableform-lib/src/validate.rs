//! Descriptor list lint.
//!
//! Rendering never depends on this. It reports lists that would produce
//! ambiguous or empty markup.

use std::collections::HashMap;

use crate::error::FieldValidationError;
use crate::model::FieldDescriptor;

pub const EMPTY_NAME: &str = "empty-name";
pub const DUPLICATE_NAME: &str = "duplicate-name";
pub const EMPTY_OPTIONS: &str = "empty-options";
pub const ID_COLLISION: &str = "id-collision";

/// Every `id` attribute the renderer emits for `field`.
fn generated_ids(field: &FieldDescriptor) -> Vec<String> {
    match field {
        FieldDescriptor::Radio(f) | FieldDescriptor::Checkbox(f) => (0..f.options.len())
            .map(|i| format!("{}{}", f.name, i))
            .collect(),
        _ => vec![field.name().to_string()],
    }
}

/// Checks name uniqueness, non-empty options and generated id uniqueness.
pub fn validate(fields: &[FieldDescriptor]) -> Result<(), Vec<FieldValidationError>> {
    let mut errors = Vec::new();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut ids: HashMap<String, usize> = HashMap::new();

    for (index, field) in fields.iter().enumerate() {
        let name = field.name();

        if name.is_empty() {
            errors.push(FieldValidationError::new(
                index,
                name,
                EMPTY_NAME,
                "name must not be empty",
            ));
        } else if let Some(first) = names.insert(name, index) {
            errors.push(FieldValidationError::new(
                index,
                name,
                DUPLICATE_NAME,
                format!("name already used by field #{first}"),
            ));
        }

        if field.option_count() == Some(0) {
            errors.push(FieldValidationError::new(
                index,
                name,
                EMPTY_OPTIONS,
                format!("{} field has no options", field.kind()),
            ));
        }

        for id in generated_ids(field) {
            if let Some(&owner) = ids.get(&id) {
                // Plain duplicate names are already reported above.
                if fields[owner].name() != name {
                    errors.push(FieldValidationError::new(
                        index,
                        name,
                        ID_COLLISION,
                        format!("generated id '{id}' clashes with field #{owner}"),
                    ));
                }
            } else {
                ids.insert(id, index);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::inquiry_form;

    fn codes(fields: &[FieldDescriptor]) -> Vec<&'static str> {
        validate(fields)
            .err()
            .unwrap_or_default()
            .iter()
            .map(|e| e.code)
            .collect()
    }

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(validate(inquiry_form()), Ok(()));
    }

    #[test]
    fn test_duplicate_name() {
        let fields = [
            FieldDescriptor::text("a", "A", ""),
            FieldDescriptor::textarea("a", "A again", ""),
        ];
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, DUPLICATE_NAME);
        assert_eq!(errors[0].index, 1);
    }

    #[test]
    fn test_empty_name_and_options() {
        let fields = [FieldDescriptor::select::<(&str, i32)>("", "Nothing", [])];
        assert_eq!(codes(&fields), [EMPTY_NAME, EMPTY_OPTIONS]);
    }

    #[test]
    fn test_synthesized_id_collision() {
        let fields = [
            FieldDescriptor::radio("c", "C", [("A", 0), ("B", 1)]),
            FieldDescriptor::text("c1", "C1", ""),
        ];
        assert_eq!(codes(&fields), [ID_COLLISION]);
    }
}
