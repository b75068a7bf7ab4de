//! Secretariat budget summaries from the second sheet

use std::sync::Arc;
use std::time::Duration;

use pdm_common::cache::TtlCache;
use pdm_common::mapper::map_secretariat_rows;
use pdm_common::model::SecretariatSummary;
use pdm_common::{Error, Result};

use crate::services::sheets::SheetSource;

const CACHE_KEY: &str = "secretariats";

/// Cached access to per-secretariat budget summaries. The backing sheet
/// is optional configuration; queries without one fail with a config
/// error rather than a fetch error.
pub struct SecretariatService {
    source: Option<Arc<dyn SheetSource>>,
    cache: TtlCache<Arc<Vec<SecretariatSummary>>>,
    ttl: Duration,
}

impl SecretariatService {
    pub fn new(source: Option<Arc<dyn SheetSource>>, ttl: Duration) -> SecretariatService {
        SecretariatService {
            source,
            cache: TtlCache::new(),
            ttl,
        }
    }

    pub async fn all(&self) -> Result<Arc<Vec<SecretariatSummary>>> {
        let source = self.source.as_ref().ok_or_else(|| {
            Error::Config(
                "Secretariats sheet URL not configured (PDM_SECRETARIATS_SHEET_URL)".to_string(),
            )
        })?;

        self.cache
            .get_or_fetch(CACHE_KEY, self.ttl, || async {
                let rows = source.fetch_rows().await?;
                let summaries = map_secretariat_rows(&rows);
                tracing::info!(secretariats = summaries.len(), "mapped secretariat rows");
                Ok(Arc::new(summaries))
            })
            .await
    }

    pub fn clear_cache(&self) {
        self.cache.clear_all();
        tracing::info!("secretariat cache cleared");
    }
}
