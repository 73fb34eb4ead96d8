use std::sync::Arc;
use std::time::Duration;

use catalog_client::application::catalog::{flatten, ExpandController, FlatRow};
use catalog_client::application::CatalogService;
use catalog_client::config::AppConfig;
use catalog_client::infrastructure::catalog_api::HttpCatalogClient;
use tracing::error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let registry =
        tracing_subscriber::registry().with(EnvFilter::new(config.logging.level.clone()));
    if config.logging.json_format {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let client = match HttpCatalogClient::new(config.api.clone()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(code = e.error_code(), "failed to construct catalog client");
            return std::process::ExitCode::FAILURE;
        }
    };
    let service = CatalogService::with_debounce(
        client,
        Duration::from_millis(config.search.debounce_ms),
    );

    let forest = match service.refresh().await {
        Ok(forest) => forest.unwrap_or_default(),
        Err(e) => {
            error!(code = e.error_code(), message = %e.public_message(), "failed to fetch category tree");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut controller = ExpandController::new();
    controller.expand_all(&forest);

    let rows = flatten(&forest);
    for row in controller.visible_rows(&rows) {
        println!("{}", render_row(row));
    }

    match service.stats() {
        Ok(Some(stats)) => println!(
            "{} categories ({} active, {} inactive; {} containers, {} children)",
            stats.total,
            stats.active,
            stats.inactive(),
            stats.parent_type,
            stats.child_type()
        ),
        Ok(None) => {}
        Err(e) => error!(code = e.error_code(), "failed to compute stats"),
    }

    std::process::ExitCode::SUCCESS
}

/// Draw one row with tree connectors: continuation columns for each non-root
/// ancestor, then a branch glyph chosen by last-sibling position.
fn render_row(row: &FlatRow<'_>) -> String {
    let mut line = String::new();

    for was_last in row.ancestor_prefix.iter().skip(1) {
        line.push_str(if *was_last { "   " } else { "\u{2502}  " });
    }

    if row.depth > 0 {
        line.push_str(if row.is_last_sibling {
            "\u{2514}\u{2500} "
        } else {
            "\u{251c}\u{2500} "
        });
    }

    line.push_str(&row.node.name);
    if !row.node.is_active {
        line.push_str(" (inactive)");
    }
    line
}
