pub mod api;
pub mod check;
pub mod config;
pub mod dataset;
pub mod reference;
pub mod report;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::reference::{ReferenceData, ReferenceError};

/// Initialize tracing. `RUST_LOG` wins; otherwise the built-in filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the reference data from the configured paths and serve the check
/// API.
///
/// Reference loading is fail-fast: without a fully built catalog index and
/// pattern list the server refuses to start, since row results would be
/// meaningless against an incomplete index.
pub async fn run(addr: SocketAddr) -> Result<(), RunError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let reference = ReferenceData::load(&config::catalog_path(), &config::guidelines_path())?;
    api::serve(Arc::new(reference), addr).await?;

    Ok(())
}
