use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// A single structural problem found while validating a fetched payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadIssue {
    /// Id of the offending node, when the payload carried one.
    pub id: Option<uuid::Uuid>,
    /// Position of the node in the nested payload, e.g. `[2].children[0]`.
    pub path: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed payload: {message}")]
    MalformedPayload {
        message: String,
        issues: Vec<PayloadIssue>,
    },

    #[error("Cycle rejected: {0}")]
    CycleRejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error")]
    Transport(#[source] reqwest::Error),

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Too many requests")]
    RateLimited,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error")]
    InternalError(#[source] anyhow::Error),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MalformedPayload { .. } => "MALFORMED_PAYLOAD",
            AppError::CycleRejected(_) => "CYCLE_REJECTED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn malformed_payload(message: impl Into<String>, issues: Vec<PayloadIssue>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
            issues,
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Message safe to show in user-facing surfaces. Transport and internal
    /// details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Transport(_) | AppError::InternalError(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            AppError::MalformedPayload { message, .. }
            | AppError::ValidationError { message, .. }
            | AppError::ServiceUnavailable { message, .. } => message.clone(),
            AppError::CycleRejected(message)
            | AppError::NotFound(message)
            | AppError::BadRequest(message) => message.clone(),
            AppError::RateLimited => "Too many requests".to_string(),
        }
    }

    pub fn payload_issues(&self) -> Option<&[PayloadIssue]> {
        match self {
            AppError::MalformedPayload { issues, .. } if !issues.is_empty() => Some(issues),
            _ => None,
        }
    }

    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            AppError::ValidationError { issues, .. } if !issues.is_empty() => Some(issues),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}
