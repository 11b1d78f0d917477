use crate::error::HitCounterError;
use crate::hit_store::CountHits;
use crate::lambda_function_client::Invoke;
use serde_json::Value;
use tracing::{info, warn};

/// Counts a hit for the request path, then hands the untouched request to the downstream.
///
/// A failed count fails the request and the downstream is never called.
pub struct HitCounter<S, D> {
    store: S,
    downstream: D,
}

impl<S, D> HitCounter<S, D>
where
    S: CountHits + Send + Sync,
    D: Invoke + Send + Sync,
{
    pub fn new(store: S, downstream: D) -> Self {
        HitCounter { store, downstream }
    }

    pub async fn handle(&self, request: Value) -> Result<Value, HitCounterError> {
        let path = request_path(&request)?;
        let hits = self.store.record_hit(path).await.map_err(|error| {
            warn!(path, %error, "failed to record hit");
            error
        })?;
        info!(path, hits, "recorded hit");

        self.downstream.invoke(&request).await
    }
}

pub fn request_path(request: &Value) -> Result<&str, HitCounterError> {
    request
        .get("path")
        .and_then(Value::as_str)
        .ok_or(HitCounterError::MissingPath)
}
