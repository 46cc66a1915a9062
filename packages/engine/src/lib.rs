//! Routevis engine: registry, reconciliation, and visibility policy.
//!
//! This layer adds state and policy on top of the pure `routevis-wire`
//! codec:
//! - `ToggleRegistry`: one visibility toggle per route ever seen, in
//!   first-seen order
//! - reconciliation passes that fold catalog and hidden-feed updates into
//!   the registry
//! - the "at least one route stays visible" guard on user-initiated hiding
//! - write-back of the hidden set to the device
//!
//! The engine talks to the outside world only through the [`RouteHost`]
//! trait; one [`RouteCoordinator`] per tracked display ties the pieces
//! together.
//!
//! # Example
//!
//! ```rust
//! use routevis_engine::{CoordinatorConfig, RouteCoordinator};
//! use routevis_mem::MemoryHost;
//!
//! let mut host = MemoryHost::new();
//! host.set_feed("catalog", "r1=Downtown|South;r2=Airport");
//!
//! let config = CoordinatorConfig {
//!     catalog_source: "catalog".into(),
//!     hidden_source: Some("hidden".into()),
//!     catalog_mode: Default::default(),
//! };
//! let mut coordinator = RouteCoordinator::new(host, config);
//! coordinator.start()?;
//!
//! assert_eq!(coordinator.registry().len(), 2);
//! coordinator.turn_off(&"r2".into())?;
//! # Ok::<(), routevis_engine::EngineError>(())
//! ```

mod config;
mod coordinator;
mod error;
mod host;
mod publish;
mod reconcile;
mod registry;
#[cfg(test)]
mod test_host;
mod toggle;
mod visibility;

pub use config::{CatalogMode, CoordinatorConfig, SourceId};
pub use coordinator::RouteCoordinator;
pub use error::{EngineError, Result};
pub use host::{HostError, RouteHost, SurfacedToggle};
pub use registry::ToggleRegistry;
pub use toggle::{Toggle, ToggleState};
pub use visibility::SwitchOutcome;

// Re-export wire types for convenience
pub use routevis_wire::{CatalogUpdate, HiddenSet, RouteKey, RouteRecord};
