#[allow(dead_code, unused_imports)]
pub mod catalog_api;

#[allow(dead_code, unused_imports)]
pub use catalog_api::MockCatalogApi;
