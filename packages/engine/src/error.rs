//! Error types for the engine layer.

use routevis_wire::RouteKey;
use thiserror::Error;

use crate::host::HostError;

/// Errors that can occur in the reconciliation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A toggle command named a route key the registry has never seen.
    #[error("unknown route: {0}")]
    UnknownRoute(RouteKey),

    /// The host failed while reading a feed, writing a value, or surfacing
    /// toggles.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
