use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, StatusCode,
};
use tracing::error;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

use super::dtos::{ApiErrorResponse, CategoryPayload};
use super::requests::{CreateCategoryRequest, SetActiveRequest, UpdateCategoryRequest};
use super::traits::CatalogApi;

/// HTTP-based catalog API client
pub struct HttpCatalogClient {
    config: ApiConfig,
    client: Client,
}

impl HttpCatalogClient {
    /// Create a new catalog API client.
    ///
    /// Requires `api.base_url` to be configured; transport, auth headers and
    /// retries beyond the configured timeout belong to the network layer.
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        if config.base_url.is_empty() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "catalog API base URL not configured"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;

        Ok(Self { config, client })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub(crate) fn tree_url(&self) -> String {
        format!("{}/categories/tree", self.base_url())
    }

    pub(crate) fn categories_url(&self) -> String {
        format!("{}/categories", self.base_url())
    }

    pub(crate) fn category_url(&self, id: Uuid) -> String {
        format!("{}/categories/{}", self.base_url(), id)
    }

    pub(crate) fn active_url(&self, id: Uuid) -> String {
        format!("{}/categories/{}/active", self.base_url(), id)
    }

    pub(crate) async fn handle_error(&self, response: reqwest::Response) -> AppError {
        let status = response.status();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) if !body.code.is_empty() => body.to_app_error(),
            _ => {
                error!(
                    status = %status,
                    "catalog API request failed with unparsable error body"
                );
                Self::map_status(status)
            }
        }
    }

    pub(crate) fn map_status(status: StatusCode) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound("category not found".to_string()),
            409 => AppError::CycleRejected(
                "the requested parent assignment was rejected".to_string(),
            ),
            429 => AppError::RateLimited,
            500..=599 => AppError::ServiceUnavailable {
                service: "catalog-api".to_string(),
                message: "Catalog service temporarily unavailable".to_string(),
            },
            _ => AppError::BadRequest("Invalid request".to_string()),
        }
    }

    async fn read_payload_list(&self, response: reqwest::Response) -> AppResult<Vec<CategoryPayload>> {
        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        response
            .json::<Vec<CategoryPayload>>()
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_tree(&self) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .get(self.tree_url())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %self.tree_url(), "failed to fetch category tree");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }

    async fn fetch_flat(&self) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .get(self.categories_url())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %self.categories_url(), "failed to fetch category list");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }

    async fn fetch_by_id(&self, id: Uuid) -> AppResult<CategoryPayload> {
        let response = self
            .client
            .get(self.category_url(id))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, category_id = %id, "failed to fetch category detail");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        response
            .json::<CategoryPayload>()
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, request: &CreateCategoryRequest) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .post(self.categories_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "failed to send category create request");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateCategoryRequest,
    ) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .put(self.category_url(id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, category_id = %id, "failed to send category update request");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .patch(self.active_url(id))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&SetActiveRequest { is_active })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, category_id = %id, "failed to send category activation request");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<Vec<CategoryPayload>> {
        let response = self
            .client
            .delete(self.category_url(id))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, category_id = %id, "failed to send category delete request");
                AppError::from(e)
            })?;

        self.read_payload_list(response).await
    }
}
