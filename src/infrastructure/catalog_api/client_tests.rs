use reqwest::StatusCode;
use uuid::Uuid;

use super::client::HttpCatalogClient;
use crate::config::ApiConfig;
use crate::error::AppError;

fn test_client() -> HttpCatalogClient {
    HttpCatalogClient::new(ApiConfig {
        base_url: "https://api.example.com/v1/".to_string(),
        timeout_seconds: 5,
    })
    .expect("client should build from valid config")
}

#[test]
fn new_rejects_empty_base_url() {
    let result = HttpCatalogClient::new(ApiConfig {
        base_url: String::new(),
        timeout_seconds: 5,
    });

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[test]
fn urls_strip_trailing_slash_from_base() {
    let client = test_client();
    let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();

    assert_eq!(
        client.tree_url(),
        "https://api.example.com/v1/categories/tree"
    );
    assert_eq!(
        client.categories_url(),
        "https://api.example.com/v1/categories"
    );
    assert_eq!(
        client.category_url(id),
        "https://api.example.com/v1/categories/550e8400-e29b-41d4-a716-446655440000"
    );
    assert_eq!(
        client.active_url(id),
        "https://api.example.com/v1/categories/550e8400-e29b-41d4-a716-446655440000/active"
    );
}

#[test]
fn status_fallback_maps_to_taxonomy() {
    assert!(matches!(
        HttpCatalogClient::map_status(StatusCode::NOT_FOUND),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        HttpCatalogClient::map_status(StatusCode::CONFLICT),
        AppError::CycleRejected(_)
    ));
    assert!(matches!(
        HttpCatalogClient::map_status(StatusCode::TOO_MANY_REQUESTS),
        AppError::RateLimited
    ));
    assert!(matches!(
        HttpCatalogClient::map_status(StatusCode::BAD_GATEWAY),
        AppError::ServiceUnavailable { service, .. } if service == "catalog-api"
    ));
    assert!(matches!(
        HttpCatalogClient::map_status(StatusCode::UNPROCESSABLE_ENTITY),
        AppError::BadRequest(_)
    ));
}
