//! Request DTOs for the cache server API
//!
//! Shapes of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

/// Request body for `POST /put`.
///
/// `value` is arbitrary JSON; the engine stores it uninterpreted. `ttl` is
/// deliberately signed so that non-positive values reach validation and come
/// back as a 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds; must be positive when present
    #[serde(default)]
    pub ttl: Option<i64>,
}

/// Query string for `GET /get` and `DELETE /delete`: `?key=K`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_request_deserialize() {
        let json = r#"{"key": "k", "value": "hello"}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "k");
        assert_eq!(req.value, json!("hello"));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_put_request_with_ttl() {
        let json = r#"{"key": "k", "value": 42, "ttl": 60}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, json!(42));
        assert_eq!(req.ttl, Some(60));
    }

    #[test]
    fn test_put_request_structured_value() {
        let json = r#"{"key": "k", "value": {"nested": [1, 2, 3]}}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value, json!({"nested": [1, 2, 3]}));
    }

    #[test]
    fn test_put_request_negative_ttl_deserializes() {
        // validation happens in the handler, not in serde
        let json = r#"{"key": "k", "value": 1, "ttl": -5}"#;
        let req: PutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(-5));
    }

    #[test]
    fn test_key_query_deserialize() {
        let q: KeyQuery = serde_json::from_value(json!({"key": "abc"})).unwrap();
        assert_eq!(q.key, "abc");
    }
}
