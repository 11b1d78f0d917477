use crate::error::HitCounterError;
use crate::hit_store::HitRecord;
use crate::response::ProxyResponse;

pub fn hits_response(records: &[HitRecord]) -> Result<ProxyResponse, HitCounterError> {
    Ok(ProxyResponse::ok(
        "application/json",
        serde_json::to_string(records)?,
    ))
}

#[cfg(test)]
mod tests {
    use crate::hit_store::HitRecord;
    use crate::viewer::hits_response;
    use serde_json::{json, Value};

    #[test]
    fn test_hits_response() {
        let response = hits_response(&[
            HitRecord {
                path: "/hello".to_string(),
                hits: 3,
            },
            HitRecord {
                path: "/world".to_string(),
                hits: 1,
            },
        ])
        .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, json!({"Content-Type": "application/json"}));
        assert_eq!(
            serde_json::from_str::<Value>(&response.body).unwrap(),
            json!([
                {"path": "/hello", "hits": 3},
                {"path": "/world", "hits": 1}
            ])
        );
    }

    #[test]
    fn test_empty_table() {
        let response = hits_response(&[]).unwrap();
        assert_eq!(response.body, "[]");
    }
}
