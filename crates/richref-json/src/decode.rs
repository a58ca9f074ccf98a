//! Node and document decoding.

use richref_types::{DocumentNode, EmbedKey, FieldMap};
use serde_json::{Map, Value};

use crate::error::{JsonError, JsonResult};

/// Container kind given to a top-level node array.
pub const DOCUMENT_KIND: &str = "document";

const NODE_TYPE: &str = "nodeType";
const CONTENT: &str = "content";
const DATA: &str = "data";
const TEXT: &str = "text";
const REFERENCE: &str = "reference";

/// Decode a rich-text document from JSON text.
pub fn decode_document_str(s: &str) -> JsonResult<DocumentNode> {
    let value: Value = serde_json::from_str(s)?;
    decode_document(&value)
}

/// Decode a rich-text document.
///
/// A top-level array becomes a [`DOCUMENT_KIND`] container holding the
/// decoded nodes in order; a single object is decoded as one node.
pub fn decode_document(value: &Value) -> JsonResult<DocumentNode> {
    match value {
        Value::Array(items) => Ok(DocumentNode::container(
            DOCUMENT_KIND,
            decode_children(items, "")?,
        )),
        Value::Object(_) => decode_at(value, ""),
        other => Err(JsonError::InvalidNode {
            at: "/".to_string(),
            reason: format!("expected array or object, got {}", kind_of(other)),
        }),
    }
}

/// Decode a single node.
pub fn decode_node(value: &Value) -> JsonResult<DocumentNode> {
    decode_at(value, "")
}

fn decode_children(items: &[Value], at: &str) -> JsonResult<Vec<DocumentNode>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_at(item, &format!("{at}/{i}")))
        .collect()
}

fn decode_at(value: &Value, at: &str) -> JsonResult<DocumentNode> {
    let pointer = if at.is_empty() { "/" } else { at };
    let obj = value.as_object().ok_or_else(|| JsonError::InvalidNode {
        at: pointer.to_string(),
        reason: format!("expected object, got {}", kind_of(value)),
    })?;

    let node_type = match obj.get(NODE_TYPE) {
        Some(Value::String(t)) if !t.is_empty() => t.as_str(),
        Some(_) => {
            return Err(JsonError::InvalidNode {
                at: pointer.to_string(),
                reason: "nodeType must be a non-empty string".to_string(),
            })
        }
        None => {
            return Err(JsonError::MissingField {
                at: pointer.to_string(),
                field: NODE_TYPE.to_string(),
            })
        }
    };

    match node_type {
        TEXT => decode_text(obj, pointer),
        REFERENCE => decode_reference(obj, pointer),
        kind => {
            let children = match obj.get(CONTENT) {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(items)) => decode_children(items, &format!("{at}/{CONTENT}"))?,
                Some(_) => {
                    return Err(JsonError::InvalidNode {
                        at: pointer.to_string(),
                        reason: "content must be an array".to_string(),
                    })
                }
            };
            Ok(DocumentNode::Container {
                kind: kind.to_string(),
                data: node_data(obj, pointer)?,
                children,
            })
        }
    }
}

fn decode_text(obj: &Map<String, Value>, at: &str) -> JsonResult<DocumentNode> {
    let value = match obj.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(JsonError::InvalidNode {
                at: at.to_string(),
                reason: "text value must be a string".to_string(),
            })
        }
        None => {
            return Err(JsonError::MissingField {
                at: at.to_string(),
                field: "value".to_string(),
            })
        }
    };

    let marks = obj
        .get("format")
        .and_then(|f| f.get("variants"))
        .and_then(Value::as_array)
        .map(|variants| {
            variants
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(DocumentNode::Text { value, marks })
}

fn decode_reference(obj: &Map<String, Value>, at: &str) -> JsonResult<DocumentNode> {
    let data = node_data(obj, at)?;
    let key = EmbedKey {
        path: string_key(&data, "path", at)?,
        href: string_key(&data, "href", at)?,
    };
    Ok(DocumentNode::EmbedReference { key, data })
}

fn string_key(data: &FieldMap, key: &str, at: &str) -> JsonResult<Option<String>> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(JsonError::InvalidNode {
            at: at.to_string(),
            reason: format!("reference {key} must be a string"),
        }),
    }
}

/// Node-local fields: every top-level key except `nodeType` and `content`,
/// then the entries of the `data` object, which win on collision.
fn node_data(obj: &Map<String, Value>, at: &str) -> JsonResult<FieldMap> {
    let mut data: FieldMap = obj
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), NODE_TYPE | CONTENT | DATA))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    match obj.get(DATA) {
        None | Some(Value::Null) => {}
        Some(Value::Object(inner)) => {
            for (k, v) in inner {
                data.insert(k.clone(), v.clone());
            }
        }
        Some(_) => {
            return Err(JsonError::InvalidNode {
                at: at.to_string(),
                reason: "data must be an object".to_string(),
            })
        }
    }
    Ok(data)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_paragraph_with_marks() {
        let doc = decode_document(&json!([
            {
                "nodeType": "paragraph",
                "content": [
                    {"nodeType": "text", "value": "Hello "},
                    {"nodeType": "text", "value": "world", "format": {"variants": ["bold", "italic"]}}
                ]
            }
        ]))
        .unwrap();

        assert_eq!(
            doc,
            DocumentNode::container(
                DOCUMENT_KIND,
                vec![DocumentNode::container(
                    "paragraph",
                    vec![
                        DocumentNode::text("Hello "),
                        DocumentNode::Text {
                            value: "world".into(),
                            marks: vec!["bold".into(), "italic".into()],
                        },
                    ]
                )]
            )
        );
    }

    #[test]
    fn decodes_asset_reference() {
        let node = decode_node(&json!({
            "nodeType": "reference",
            "data": {"path": "/content/dam/wknd/surf.jpg", "mimetype": "image/jpeg"}
        }))
        .unwrap();

        let DocumentNode::EmbedReference { key, data } = node else {
            panic!("expected embed");
        };
        assert_eq!(key, EmbedKey::path("/content/dam/wknd/surf.jpg"));
        assert_eq!(data["mimetype"], json!("image/jpeg"));
    }

    #[test]
    fn decodes_fragment_reference_with_value() {
        let node = decode_node(&json!({
            "nodeType": "reference",
            "value": "Surf Camp",
            "data": {"href": "/content/dam/events/surf-camp", "type": "fragment"}
        }))
        .unwrap();

        let DocumentNode::EmbedReference { key, data } = node else {
            panic!("expected embed");
        };
        assert_eq!(key, EmbedKey::href("/content/dam/events/surf-camp"));
        assert_eq!(data["value"], json!("Surf Camp"));
        assert_eq!(data["type"], json!("fragment"));
    }

    #[test]
    fn header_style_kept_in_data() {
        let node = decode_node(&json!({
            "nodeType": "header",
            "style": "h2",
            "content": [{"nodeType": "text", "value": "Schedule"}]
        }))
        .unwrap();
        let DocumentNode::Container { kind, data, children } = node else {
            panic!("expected container");
        };
        assert_eq!(kind, "header");
        assert_eq!(data["style"], json!("h2"));
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn data_object_wins_over_top_level() {
        let node = decode_node(&json!({
            "nodeType": "link",
            "href": "/top",
            "data": {"href": "/inner"}
        }))
        .unwrap();
        let DocumentNode::Container { data, .. } = node else {
            panic!("expected container");
        };
        assert_eq!(data["href"], json!("/inner"));
    }

    #[test]
    fn missing_node_type_reports_pointer() {
        let err = decode_document(&json!([
            {"nodeType": "paragraph", "content": [{"value": "x"}]}
        ]))
        .unwrap_err();
        match err {
            JsonError::MissingField { at, field } => {
                assert_eq!(at, "/0/content/0");
                assert_eq!(field, "nodeType");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_string_reference_key() {
        let err = decode_node(&json!({"nodeType": "reference", "data": {"path": 7}})).unwrap_err();
        assert!(matches!(err, JsonError::InvalidNode { .. }));
    }

    #[test]
    fn rejects_scalar_document() {
        let err = decode_document(&json!("hello")).unwrap_err();
        assert!(err.to_string().contains("expected array or object"));
    }

    #[test]
    fn decodes_from_str() {
        let doc = decode_document_str(r#"[{"nodeType":"text","value":"hi"}]"#).unwrap();
        assert_eq!(
            doc,
            DocumentNode::container(DOCUMENT_KIND, vec![DocumentNode::text("hi")])
        );
        assert!(matches!(
            decode_document_str("[{"),
            Err(JsonError::Parse(_))
        ));
    }
}
