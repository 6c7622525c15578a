//! HTTP surface: a thin layer over the validation engine.
//!
//! Handlers read only the shared, immutable [`ReferenceData`]; every
//! submission is parsed, checked and answered independently.

pub mod endpoints;
pub mod error;
pub mod router;

pub use error::ApiError;
pub use router::check_api_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::reference::ReferenceData;

/// Bind and serve the check API until the process exits.
pub async fn serve(reference: Arc<ReferenceData>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "check server listening");
    axum::serve(listener, check_api_router(reference)).await
}
