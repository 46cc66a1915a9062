//! In-memory host for the routevis engine.
//!
//! [`MemoryHost`] implements the engine's `RouteHost` contract entirely in
//! memory: settable feed values, a write log, a surfaced-batch log, and a
//! seedable restore map. Use it to exercise a coordinator without a real
//! device behind it - tests, demos, or a dry-run harness.
//!
//! # Example
//!
//! ```rust
//! use routevis_engine::{CoordinatorConfig, RouteCoordinator};
//! use routevis_mem::MemoryHost;
//!
//! let mut host = MemoryHost::new();
//! host.set_feed("catalog", "r1=Downtown");
//!
//! let config = CoordinatorConfig {
//!     catalog_source: "catalog".into(),
//!     hidden_source: Some("hidden".into()),
//!     catalog_mode: Default::default(),
//! };
//! let mut coordinator = RouteCoordinator::new(host, config);
//! coordinator.start().unwrap();
//! assert_eq!(coordinator.registry().len(), 1);
//! ```

mod host;

pub use host::MemoryHost;
