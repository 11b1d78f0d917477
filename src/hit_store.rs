use crate::error::HitCounterError;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Number of times a request path has been seen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitRecord {
    pub path: String,
    pub hits: u64,
}

#[async_trait]
pub trait CountHits {
    /// Atomically adds one hit for `path` and returns the new count.
    async fn record_hit(&self, path: &str) -> Result<u64, HitCounterError>;

    /// Every record in the store, ordered by path.
    async fn list_hits(&self) -> Result<Vec<HitRecord>, HitCounterError>;
}

#[derive(Debug, Default)]
pub struct MemoryHitStore {
    hits: Mutex<HashMap<String, u64>>,
}

#[async_trait]
impl CountHits for MemoryHitStore {
    async fn record_hit(&self, path: &str) -> Result<u64, HitCounterError> {
        let mut hits = self.hits.lock().map_err(|_| HitCounterError::LockPoisoned)?;
        let count = hits.entry(path.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn list_hits(&self) -> Result<Vec<HitRecord>, HitCounterError> {
        let hits = self.hits.lock().map_err(|_| HitCounterError::LockPoisoned)?;
        let mut records: Vec<HitRecord> = hits
            .iter()
            .map(|(path, hits)| HitRecord {
                path: path.clone(),
                hits: *hits,
            })
            .collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}

impl MemoryHitStore {
    pub fn new() -> Self {
        Self::default()
    }
}
