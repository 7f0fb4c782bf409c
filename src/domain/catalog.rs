use crate::domain::models::{Catalog, KeywordRecord};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;

    fn describe(&self) -> String;
}

/// Lazily loaded catalog shared by every suggestion lookup.
///
/// The first successful load is kept for the rest of the session. A failed
/// load leaves the cache empty so the next lookup fetches again. The mutex is
/// held across the fetch, so concurrent lookups never start a second fetch.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    records: Mutex<Option<Arc<[KeywordRecord]>>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            records: Mutex::new(None),
        }
    }

    pub async fn get(&self) -> Result<Arc<[KeywordRecord]>> {
        let mut guard = self.records.lock().await;
        if let Some(records) = guard.as_ref() {
            return Ok(Arc::clone(records));
        }

        let loaded: Arc<[KeywordRecord]> = self.source.load().await?.into();
        tracing::info!(
            source = %self.source.describe(),
            rows = loaded.len(),
            "keyword catalog loaded"
        );
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }
}
