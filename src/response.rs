use serde::Serialize;
use serde_json::{json, Value};

/// Lambda proxy integration response understood by API Gateway.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ProxyResponse {
    pub fn ok(content_type: &str, body: String) -> Self {
        ProxyResponse {
            status_code: 200,
            headers: json!({ "Content-Type": content_type }),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::response::ProxyResponse;
    use serde_json::json;

    #[test]
    fn test_serializes_proxy_shape() {
        let response = ProxyResponse::ok("text/plain", "hi".to_string());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "headers": {"Content-Type": "text/plain"},
                "body": "hi"
            })
        );
    }
}
