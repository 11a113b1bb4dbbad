use serde::{Deserialize, Serialize};

/// Request body for the query endpoint.
///
/// The body always keeps the fixed `{"query": ...}` shape: an empty input
/// serializes as `""` and an absent one as `null`; the key itself is never
/// dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QueryRequest {
    /// The query text from the user, or nothing at all.
    pub query: Option<String>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// Response body returned by the query endpoint.
///
/// `response` is required: a reply without it does not deserialize and the
/// query counts as failed. Any other fields the backend includes are
/// ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QueryResponse {
    /// The response text to display.
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_keeps_fixed_shape() {
        let body = serde_json::to_value(QueryRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"query": "hello"}));

        let body = serde_json::to_value(QueryRequest::new("")).unwrap();
        assert_eq!(body, json!({"query": ""}));
    }

    #[test]
    fn absent_query_serializes_as_null() {
        let body = serde_json::to_value(QueryRequest { query: None }).unwrap();
        assert_eq!(body, json!({"query": null}));
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let parsed: QueryResponse =
            serde_json::from_value(json!({"response": "X", "model": "m1", "tokens": 42})).unwrap();
        assert_eq!(parsed.response, "X");
    }

    #[test]
    fn response_field_is_required() {
        let result = serde_json::from_value::<QueryResponse>(json!({"message": "no response"}));
        assert!(result.is_err());
    }
}
