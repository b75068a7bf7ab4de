//! Product-goal service: cached fetch plus engine queries

use std::sync::Arc;
use std::time::Duration;

use pdm_common::aggregate::{aggregate, overview};
use pdm_common::cache::TtlCache;
use pdm_common::mapper::map_goal_rows;
use pdm_common::model::{
    AggregationBucket, FiscalYear, HierarchyLevel, PlanOverview, ProductGoal,
};
use pdm_common::Result;

use crate::services::sheets::SheetSource;

const CACHE_KEY: &str = "goals";

/// Cached access to the mapped goal collection and its derived views.
pub struct GoalService {
    source: Arc<dyn SheetSource>,
    cache: TtlCache<Arc<Vec<ProductGoal>>>,
    ttl: Duration,
}

impl GoalService {
    pub fn new(source: Arc<dyn SheetSource>, ttl: Duration) -> GoalService {
        GoalService {
            source,
            cache: TtlCache::new(),
            ttl,
        }
    }

    /// The full mapped collection, fetched at most once per TTL window.
    pub async fn all(&self) -> Result<Arc<Vec<ProductGoal>>> {
        self.cache
            .get_or_fetch(CACHE_KEY, self.ttl, || async {
                let rows = self.source.fetch_rows().await?;
                let goals = map_goal_rows(&rows);
                tracing::info!(goals = goals.len(), "mapped goal rows");
                Ok(Arc::new(goals))
            })
            .await
    }

    /// Lookup by mapping-time id. An absent id is not an error.
    pub async fn by_id(&self, id: u32) -> Result<Option<ProductGoal>> {
        let goals = self.all().await?;
        Ok(goals.iter().find(|g| g.id == id).cloned())
    }

    /// Case-insensitive substring match on the axis label.
    pub async fn by_axis(&self, pattern: &str) -> Result<Vec<ProductGoal>> {
        let goals = self.all().await?;
        let needle = pattern.to_lowercase();
        Ok(goals
            .iter()
            .filter(|g| g.axis.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Case-insensitive substring match on the program label.
    pub async fn by_program(&self, pattern: &str) -> Result<Vec<ProductGoal>> {
        let goals = self.all().await?;
        let needle = pattern.to_lowercase();
        Ok(goals
            .iter()
            .filter(|g| g.program.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Grouped rollup for one hierarchy level and fiscal year.
    pub async fn aggregate(
        &self,
        level: HierarchyLevel,
        year: FiscalYear,
    ) -> Result<Vec<AggregationBucket>> {
        let goals = self.all().await?;
        tracing::debug!(level = %level, year = %year, "aggregating goals");
        Ok(aggregate(&goals, level, year))
    }

    /// Whole-plan summary.
    pub async fn overview(&self) -> Result<PlanOverview> {
        let goals = self.all().await?;
        Ok(overview(&goals))
    }

    /// Drop the cached collection; the next read refetches.
    pub fn clear_cache(&self) {
        self.cache.clear_all();
        tracing::info!("goal cache cleared");
    }
}
