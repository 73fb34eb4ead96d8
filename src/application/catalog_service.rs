use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::application::catalog::{
    build, build_detached, build_flat, filter, parent_candidates, CategoryFilter, CategoryStats,
    ParentCandidate,
};
use crate::domain::{find_node, CategoryNode, Forest};
use crate::error::{AppError, AppResult};
use crate::infrastructure::catalog_api::{
    CatalogApi, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::util::{Debouncer, RequestSequencer};

const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Client-side orchestration over the catalog API: owns the cached forest,
/// tags every fetch so the last-issued request wins, and replaces the cache
/// wholesale with the server's authoritative payload after each mutation
/// (activation cascades are computed server-side, never patched locally).
pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
    cache: RwLock<Option<Forest>>,
    sequencer: RequestSequencer,
    debouncer: Debouncer,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self::with_debounce(api, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(api: Arc<dyn CatalogApi>, quiet_period: Duration) -> Self {
        Self {
            api,
            cache: RwLock::new(None),
            sequencer: RequestSequencer::new(),
            debouncer: Debouncer::new(quiet_period),
        }
    }

    /// Snapshot of the cached forest; `None` before the first refresh.
    pub fn forest(&self) -> AppResult<Option<Forest>> {
        Ok(self.read_cache()?.clone())
    }

    /// Summary counters over the cached, unfiltered forest.
    pub fn stats(&self) -> AppResult<Option<CategoryStats>> {
        Ok(self
            .read_cache()?
            .as_ref()
            .map(|forest| CategoryStats::from_forest(forest)))
    }

    /// Legal parent choices for the node being edited, from the cached
    /// forest. Empty before the first refresh.
    pub fn parent_candidates(&self, editing: Option<Uuid>) -> AppResult<Vec<ParentCandidate>> {
        Ok(self
            .read_cache()?
            .as_ref()
            .map(|forest| parent_candidates(forest, editing))
            .unwrap_or_default())
    }

    /// Fetch and rebuild the whole forest.
    ///
    /// Returns `Ok(None)` when a newer fetch was issued while this one was
    /// in flight; the stale response is discarded and the cache untouched.
    pub async fn refresh(&self) -> AppResult<Option<Forest>> {
        let seq = self.sequencer.issue();
        let result = self.api.fetch_tree().await;

        // Superseded responses are discarded on arrival, failures included;
        // only the latest-issued request may surface an error.
        if !self.sequencer.is_current(seq) {
            info!(seq, "discarding superseded fetch response");
            return Ok(None);
        }

        let forest = build(&result?)?;
        self.replace_cache(forest.clone())?;
        info!(categories = forest.len(), "category forest replaced");
        Ok(Some(forest))
    }

    /// Fetch, rebuild, and return the filtered view for a search predicate.
    ///
    /// The cache always stores the unfiltered forest; the returned value is
    /// the derived view. Stale responses are discarded as in [`refresh`].
    ///
    /// [`refresh`]: CatalogService::refresh
    pub async fn search(&self, predicate: &CategoryFilter) -> AppResult<Option<Forest>> {
        let seq = self.sequencer.issue();
        let result = self.api.fetch_tree().await;

        if !self.sequencer.is_current(seq) {
            info!(seq, "discarding superseded search response");
            return Ok(None);
        }

        let forest = build(&result?)?;
        self.replace_cache(forest.clone())?;

        if predicate.is_identity() {
            return Ok(Some(forest));
        }
        Ok(Some(filter(&forest, predicate)))
    }

    /// Debounced variant of [`search`] for keystroke-driven callers: waits
    /// out the configured quiet period first, and skips the fetch entirely
    /// when a newer call supersedes this one during the wait.
    ///
    /// [`search`]: CatalogService::search
    pub async fn debounced_search(&self, predicate: &CategoryFilter) -> AppResult<Option<Forest>> {
        if !self.debouncer.settle().await {
            return Ok(None);
        }
        self.search(predicate).await
    }

    /// Current detail of a single category.
    pub async fn category(&self, id: Uuid) -> AppResult<CategoryNode> {
        let payload = self.api.fetch_by_id(id).await?;
        build_detached(&payload)
    }

    /// Flat, unpaginated list of all categories, for container-candidate
    /// contexts that do not need nesting.
    pub async fn flat_candidates(&self) -> AppResult<Vec<CategoryNode>> {
        let payload = self.api.fetch_flat().await?;
        build_flat(&payload)
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> AppResult<Forest> {
        request.validate()?;

        let result = self.api.create(request).await;
        self.confirm_mutation("create", result).await
    }

    pub async fn update(&self, id: Uuid, request: &UpdateCategoryRequest) -> AppResult<Forest> {
        request.validate()?;
        self.precheck_parent(id, request.parent_id)?;

        let result = self.api.update(id, request).await;
        self.confirm_mutation("update", result).await
    }

    /// Deactivation cascades server-side to the whole descendant subtree;
    /// the returned payload is the authoritative post-cascade state.
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Forest> {
        let result = self.api.set_active(id, is_active).await;
        self.confirm_mutation("set_active", result).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Forest> {
        let result = self.api.delete(id).await;
        self.confirm_mutation("delete", result).await
    }

    /// Rejects a parent choice the candidate resolver would never have
    /// offered: the node itself, or a cached strict descendant. The server
    /// remains the authority; this only catches stale UI state early.
    fn precheck_parent(&self, id: Uuid, parent_id: Option<Uuid>) -> AppResult<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        if parent_id == id {
            return Err(AppError::CycleRejected(
                "category cannot be its own parent".to_string(),
            ));
        }

        if let Some(forest) = self.read_cache()?.as_ref() {
            if let Some(node) = find_node(forest, id) {
                if node.descendant_ids().contains(&parent_id) {
                    return Err(AppError::CycleRejected(
                        "category parent relationship would create a cycle".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Replace the cache with the post-mutation payload, or surface the
    /// mutation error after forcing a refresh so the cache cannot drift
    /// from server truth.
    async fn confirm_mutation(
        &self,
        operation: &str,
        result: AppResult<Vec<crate::infrastructure::catalog_api::CategoryPayload>>,
    ) -> AppResult<Forest> {
        match result {
            Ok(payload) => {
                let forest = build(&payload)?;
                self.replace_cache(forest.clone())?;
                info!(operation, categories = forest.len(), "mutation confirmed");
                Ok(forest)
            }
            Err(error) => {
                warn!(
                    operation,
                    code = error.error_code(),
                    "mutation failed, forcing re-fetch"
                );
                if let Err(refresh_error) = self.refresh().await {
                    warn!(
                        code = refresh_error.error_code(),
                        "forced re-fetch after failed mutation also failed"
                    );
                }
                Err(error)
            }
        }
    }

    fn read_cache(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Option<Forest>>> {
        self.cache
            .read()
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("forest cache lock poisoned")))
    }

    fn replace_cache(&self, forest: Forest) -> AppResult<()> {
        let mut cache = self
            .cache
            .write()
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("forest cache lock poisoned")))?;
        *cache = Some(forest);
        Ok(())
    }
}
