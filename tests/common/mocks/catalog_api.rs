#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use catalog_client::error::{AppError, AppResult};
use catalog_client::infrastructure::catalog_api::{
    CatalogApi, CategoryPayload, CreateCategoryRequest, UpdateCategoryRequest,
};
use uuid::Uuid;

/// In-memory stand-in for the catalog API.
///
/// `fetch_tree` pops a queued response when one is present (falling back to
/// `tree`), and pops a queued delay to simulate slow responses; that is what
/// lets tests replay out-of-order network completions deterministically.
#[derive(Default)]
pub struct MockCatalogApi {
    pub tree: Mutex<Vec<CategoryPayload>>,
    pub queued_responses: Mutex<VecDeque<AppResult<Vec<CategoryPayload>>>>,
    pub queued_delays: Mutex<VecDeque<Duration>>,
    pub fetch_count: AtomicUsize,
    pub fail_mutations: AtomicBool,
}

impl MockCatalogApi {
    pub fn with_tree(tree: Vec<CategoryPayload>) -> Self {
        Self {
            tree: Mutex::new(tree),
            ..Self::default()
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> AppResult<Vec<CategoryPayload>> {
        let queued = self
            .queued_responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front();
        queued.unwrap_or_else(|| Ok(self.tree.lock().expect("tree mutex poisoned").clone()))
    }

    async fn maybe_delay(&self) {
        let delay = self
            .queued_delays
            .lock()
            .expect("delays mutex poisoned")
            .pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn mutation_result(&self) -> AppResult<Vec<CategoryPayload>> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(AppError::CycleRejected(
                "parent relationship would create a cycle".to_string(),
            ));
        }
        Ok(self.tree.lock().expect("tree mutex poisoned").clone())
    }
}

#[async_trait]
impl CatalogApi for MockCatalogApi {
    async fn fetch_tree(&self) -> AppResult<Vec<CategoryPayload>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        self.maybe_delay().await;
        response
    }

    async fn fetch_flat(&self) -> AppResult<Vec<CategoryPayload>> {
        fn collect(entries: &[CategoryPayload], out: &mut Vec<CategoryPayload>) {
            for entry in entries {
                let mut flat = entry.clone();
                flat.children = Vec::new();
                out.push(flat);
                collect(&entry.children, out);
            }
        }

        let mut flat = Vec::new();
        collect(&self.tree.lock().expect("tree mutex poisoned"), &mut flat);
        Ok(flat)
    }

    async fn fetch_by_id(&self, id: Uuid) -> AppResult<CategoryPayload> {
        fn find(entries: &[CategoryPayload], id: Uuid) -> Option<CategoryPayload> {
            for entry in entries {
                if entry.id == Some(id) {
                    return Some(entry.clone());
                }
                if let Some(found) = find(&entry.children, id) {
                    return Some(found);
                }
            }
            None
        }

        find(&self.tree.lock().expect("tree mutex poisoned"), id)
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))
    }

    async fn create(&self, _request: &CreateCategoryRequest) -> AppResult<Vec<CategoryPayload>> {
        self.mutation_result()
    }

    async fn update(
        &self,
        _id: Uuid,
        _request: &UpdateCategoryRequest,
    ) -> AppResult<Vec<CategoryPayload>> {
        self.mutation_result()
    }

    async fn set_active(&self, _id: Uuid, _is_active: bool) -> AppResult<Vec<CategoryPayload>> {
        self.mutation_result()
    }

    async fn delete(&self, _id: Uuid) -> AppResult<Vec<CategoryPayload>> {
        self.mutation_result()
    }
}
