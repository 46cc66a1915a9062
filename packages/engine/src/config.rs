//! Per-instance coordinator configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use routevis_wire::CatalogMode;

/// Identifier of a feed or sink in the host's namespace.
///
/// Opaque to the engine. A host backed by a home-automation bus would put an
/// entity id here; the in-memory test host uses plain names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        SourceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        SourceId::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        SourceId(id)
    }
}

/// Configuration for one coordinator instance - one tracked transit display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Feed publishing route descriptions (`key=name[|headsign]`).
    pub catalog_source: SourceId,

    /// Feed and write-back sink for the hidden-route set. Optional: a
    /// display without a hidden channel still gets toggles, but visibility
    /// changes cannot be pushed back to it.
    #[serde(default)]
    pub hidden_source: Option<SourceId>,

    /// Wire generation of the catalog feed.
    #[serde(default)]
    pub catalog_mode: CatalogMode,
}
