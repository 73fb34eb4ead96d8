use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;

/// One entry of the nested category payload returned by the catalog API.
///
/// `id` and `name` are optional at the serde level so the tree builder can
/// report missing fields as payload issues instead of an opaque decode
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub is_parent_type: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub children: Vec<CategoryPayload>,
}

/// Error response body emitted by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
}

impl ApiErrorResponse {
    pub fn message_or_default(&self) -> &str {
        if self.message.is_empty() {
            "Catalog API request failed"
        } else {
            self.message.as_str()
        }
    }

    /// Maps catalog API error codes to AppError variants.
    pub fn to_app_error(&self) -> AppError {
        let message = self.message_or_default();

        error!(
            code = %self.code,
            message = %message,
            "catalog API error"
        );

        match self.code.as_str() {
            "NOT_FOUND" => AppError::NotFound(message.to_string()),

            "CYCLE_REJECTED" | "INVALID_PARENT" => AppError::CycleRejected(message.to_string()),

            "VALIDATION_ERROR" => AppError::ValidationError {
                message: message.to_string(),
                issues: Vec::new(),
            },

            "RATE_LIMITED" => AppError::RateLimited,

            "BAD_REQUEST" => AppError::BadRequest(message.to_string()),

            _ => AppError::InternalError(anyhow::anyhow!("catalog service error: {message}")),
        }
    }
}
