use validator::ValidationErrors;

use super::app_error::{AppError, ValidationIssue};

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::malformed_payload(
                "response body did not match the expected category payload shape".to_string(),
                Vec::new(),
            );
        }

        if err.is_timeout() || err.is_connect() {
            return AppError::ServiceUnavailable {
                service: "catalog-api".to_string(),
                message: "Catalog service is unreachable. Please try again later.".to_string(),
            };
        }

        AppError::Transport(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError {
            message: "request validation failed".to_string(),
            issues: field_issues(&errors),
        }
    }
}

/// The request DTOs in this crate are flat structs, so every validator error
/// is a field-level error; nested error kinds cannot occur.
fn field_issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ValidationIssue {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
                code: error.code.to_string(),
            })
        })
        .collect();

    // field_errors() iterates a map; sort for a stable issue order.
    issues.sort_by(|a, b| a.field.cmp(&b.field).then(a.code.cmp(&b.code)));
    issues
}
