use async_trait::async_trait;
use uuid::Uuid;

use super::dtos::CategoryPayload;
use super::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::AppResult;

/// Remote catalog operations consumed by the client core.
///
/// Mutations respond with the authoritative post-mutation nested payload;
/// the cached forest is always replaced wholesale with that payload because
/// activation cascades are computed server-side.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Full category hierarchy, nested, unpaginated.
    async fn fetch_tree(&self) -> AppResult<Vec<CategoryPayload>>;

    /// Flat, unpaginated list of all categories (no nesting).
    async fn fetch_flat(&self) -> AppResult<Vec<CategoryPayload>>;

    /// Current detail of a single category.
    async fn fetch_by_id(&self, id: Uuid) -> AppResult<CategoryPayload>;

    async fn create(&self, request: &CreateCategoryRequest) -> AppResult<Vec<CategoryPayload>>;

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateCategoryRequest,
    ) -> AppResult<Vec<CategoryPayload>>;

    /// Expected to cascade deactivation to the whole descendant subtree.
    async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Vec<CategoryPayload>>;

    async fn delete(&self, id: Uuid) -> AppResult<Vec<CategoryPayload>>;
}
