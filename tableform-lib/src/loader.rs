//! Reading descriptor lists from JSON.

use std::path::Path;

use crate::error::LoadError;
use crate::model::FieldDescriptor;

/// Parses a JSON array of descriptors.
pub fn from_json(json: &str) -> Result<Vec<FieldDescriptor>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON descriptor file.
pub fn from_file(path: &Path) -> Result<Vec<FieldDescriptor>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let fields = from_json(&content)?;
    log::debug!("[loader] {} descriptors from {}", fields.len(), path.display());
    Ok(fields)
}

/// Serializes a descriptor list as pretty-printed JSON.
pub fn to_json(fields: &[FieldDescriptor]) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(fields)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::inquiry_form;
    use crate::model::InputType;

    #[test]
    fn test_parse_each_kind() {
        let json = r#"[
            {"kind": "input", "name": "tel", "label": "Phone", "type": "tel", "placeholder": "080"},
            {"kind": "radio", "name": "r", "label": "R", "values": [{"label": "A", "value": 0}]},
            {"kind": "checkbox", "name": "c", "label": "C", "values": [{"label": "B", "value": 4}]},
            {"kind": "select", "name": "s", "label": "S", "options": [{"text": "T", "value": 1}]},
            {"kind": "textarea", "name": "t", "label": "T", "placeholder": ""}
        ]"#;
        let fields = from_json(json).unwrap();

        assert_eq!(fields.len(), 5);
        match &fields[0] {
            FieldDescriptor::Input(f) => assert_eq!(f.input_type, InputType::Tel),
            other => panic!("expected input, got {other:?}"),
        }
        assert_eq!(fields[2].option_count(), Some(1));
        assert_eq!(fields[4].kind(), "textarea");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = from_json(r#"[{"kind": "slider", "name": "x", "label": "X"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_unknown_input_type_is_rejected() {
        let json = r#"[{"kind": "input", "name": "x", "label": "X", "type": "date", "placeholder": ""}]"#;
        assert!(from_json(json).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(to_json(inquiry_form()).unwrap().as_bytes())
            .unwrap();

        assert_eq!(from_file(file.path()).unwrap(), inquiry_form());
    }

    #[test]
    fn test_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"kind": "input", "name": "x"#).unwrap();

        let err = from_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = from_file(Path::new("/nonexistent/fields.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
