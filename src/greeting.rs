use crate::response::ProxyResponse;
use serde_json::Value;
use tracing::info;

pub const GREETING: &str = "Hello Architect!";

pub fn hello_response(request: &Value) -> ProxyResponse {
    let path = request.get("path").and_then(Value::as_str).unwrap_or("");
    info!(path, "greeting request");
    ProxyResponse::ok("text/plain", GREETING.to_string())
}

#[cfg(test)]
mod tests {
    use crate::greeting::{hello_response, GREETING};
    use serde_json::json;

    #[test]
    fn test_hello_response() {
        let response = hello_response(&json!({"path": "/hello", "httpMethod": "GET"}));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, json!({"Content-Type": "text/plain"}));
        assert_eq!(response.body, GREETING);
    }

    #[test]
    fn test_hello_response_without_path() {
        let response = hello_response(&json!({}));
        assert_eq!(response.body, GREETING);
    }
}
