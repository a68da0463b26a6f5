//! Response Decoding
//!
//! Every endpoint wraps its payload in `{ "data": ... }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

fn parse_body(body: &str) -> CatalogResult<Value> {
    serde_json::from_str(body).map_err(|e| CatalogError::InvalidBody(e.to_string()))
}

/// Decode `{ "data": [T] }`; JSON of any other shape is malformed
pub fn decode_list<T: DeserializeOwned>(body: &str) -> CatalogResult<Vec<T>> {
    let mut envelope = parse_body(body)?;
    match envelope.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item)
                    .map_err(|e| CatalogError::Malformed(format!("invalid record: {}", e)))
            })
            .collect(),
        Some(_) => Err(CatalogError::Malformed("`data` is not an array".to_string())),
        None => Err(CatalogError::Malformed("missing `data` field".to_string())),
    }
}

/// Decode `{ "data": T }`; a missing or null payload is `NotFound`
pub fn decode_one<T: DeserializeOwned>(body: &str) -> CatalogResult<T> {
    let mut envelope = parse_body(body)?;
    match envelope.get_mut("data").map(Value::take) {
        None | Some(Value::Null) => {
            Err(CatalogError::NotFound("response has no `data` payload".to_string()))
        }
        Some(payload) => serde_json::from_value(payload)
            .map_err(|e| CatalogError::Malformed(format!("invalid record: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ProductRecord};

    #[test]
    fn test_decode_list() {
        let categories: Vec<Category> =
            decode_list(r#"{"data": [{"id": 1, "name": "Fruit"}, {"id": 2, "name": "Shade"}]}"#)
                .unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], Category { id: 1, name: "Fruit".to_string() });
    }

    #[test]
    fn test_decode_list_shapes() {
        let missing = decode_list::<Category>(r#"{"status": true}"#).unwrap_err();
        assert!(missing.is_malformed());

        let not_array = decode_list::<Category>(r#"{"data": {"id": 1}}"#).unwrap_err();
        assert!(not_array.is_malformed());

        let not_json = decode_list::<Category>("<html>oops</html>").unwrap_err();
        assert!(matches!(not_json, CatalogError::InvalidBody(_)));
        assert!(!not_json.is_malformed());

        let bad_record = decode_list::<Category>(r#"{"data": [{"id": "x"}]}"#).unwrap_err();
        assert!(bad_record.is_malformed());

        let empty: Vec<Category> = decode_list(r#"{"data": []}"#).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_one() {
        let record: ProductRecord = decode_one(r#"{"data": {"id": 10, "name": "Mango"}}"#).unwrap();
        assert_eq!(record.id, 10);

        assert_eq!(
            decode_one::<ProductRecord>(r#"{"data": null}"#).unwrap_err(),
            CatalogError::NotFound("response has no `data` payload".to_string())
        );
        assert!(matches!(
            decode_one::<ProductRecord>(r#"{}"#),
            Err(CatalogError::NotFound(_))
        ));
        assert!(decode_one::<ProductRecord>(r#"{"data": 5}"#).unwrap_err().is_malformed());
        assert!(matches!(
            decode_one::<ProductRecord>(r#"{"data": {"id": 10,"#),
            Err(CatalogError::InvalidBody(_))
        ));
    }
}
