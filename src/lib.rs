//! Storefront/admin catalog client.
//!
//! The core is the category hierarchy: building a validated forest from the
//! remote catalog payload, projecting it into renderable rows, filtering it
//! with ancestor preservation, resolving cycle-safe parent candidates, and
//! toggling visibility ranges. Everything network-facing lives behind the
//! [`infrastructure::catalog_api::CatalogApi`] seam.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod util;
