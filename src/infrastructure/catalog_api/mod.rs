pub mod client;
pub mod dtos;
pub mod requests;
pub mod traits;

#[cfg(test)]
mod client_tests;

pub use client::HttpCatalogClient;
pub use dtos::{ApiErrorResponse, CategoryPayload};
pub use requests::{CreateCategoryRequest, SetActiveRequest, UpdateCategoryRequest};
pub use traits::CatalogApi;
