//! JSON codec for the persisted todo blob.
//!
//! Layout: a JSON array of `{id, text, description, finished}` objects.
//! Unknown fields are ignored on decode.

use crate::model::todo::TodoItem;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CodecError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode todo blob: {err}"),
            Self::Decode(err) => write!(f, "malformed todo blob: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

/// Serializes the full list into the blob format.
pub fn encode_todos(items: &[TodoItem]) -> Result<String, CodecError> {
    serde_json::to_string(items).map_err(CodecError::Encode)
}

/// Parses a blob into todo records, preserving stored order.
pub fn decode_todos(blob: &str) -> Result<Vec<TodoItem>, CodecError> {
    serde_json::from_str(blob).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::{decode_todos, encode_todos, CodecError};
    use crate::model::todo::TodoItem;

    #[test]
    fn encoded_blob_uses_stored_field_names_only() {
        let blob = encode_todos(&[TodoItem::with_id("1", "Buy milk", "2%")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let object = value[0].as_object().unwrap();

        let mut keys = object.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["description", "finished", "id", "text"]);
    }

    #[test]
    fn decode_ignores_legacy_expand_flag() {
        let blob = r#"[{"id":"a","text":"t","description":"d","finished":true,"isExpanded":true}]"#;
        let items = decode_todos(blob).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].finished);
    }

    #[test]
    fn decode_rejects_non_array_blob() {
        let err = decode_todos(r#"{"id":"a"}"#).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
