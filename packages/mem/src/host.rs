//! The in-memory `RouteHost` implementation.

use std::collections::HashMap;

use routevis_engine::{HostError, RouteHost, RouteKey, SourceId, SurfacedToggle};

/// In-memory host standing in for a real device bus.
///
/// Feed values are set directly; writes are logged and also update the
/// written source's feed value, the way a real device echoes an accepted
/// write back through its state. Surfaced toggle batches and restore
/// lookups are recorded for inspection.
#[derive(Debug, Default)]
pub struct MemoryHost {
    /// Current value per source, as a device would report it.
    feeds: HashMap<SourceId, String>,
    /// Every accepted write, in call order.
    writes: Vec<(SourceId, String)>,
    /// Every surfaced batch, in call order.
    surfaced: Vec<Vec<SurfacedToggle>>,
    /// Persisted visibility answered by `restore_visible`.
    restore: HashMap<RouteKey, bool>,
    /// When set, `write_value` fails without logging or updating anything.
    fail_writes: bool,
}

impl MemoryHost {
    /// Create a host with no feeds, no history, and no restore data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feed's current value, as if the device published it.
    pub fn set_feed(&mut self, source: impl Into<SourceId>, value: impl Into<String>) {
        self.feeds.insert(source.into(), value.into());
    }

    /// Seed a persisted visibility value for `restore_visible` to answer.
    pub fn seed_restore(&mut self, key: impl Into<RouteKey>, visible: bool) {
        self.restore.insert(key.into(), visible);
    }

    /// Make every subsequent write fail until called again with `false`.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// A feed's current value, if any.
    pub fn feed(&self, source: impl Into<SourceId>) -> Option<&str> {
        self.feeds.get(&source.into()).map(String::as_str)
    }

    /// All accepted writes, in call order.
    pub fn writes(&self) -> &[(SourceId, String)] {
        &self.writes
    }

    /// The most recent value written to a source, if any.
    pub fn last_write(&self, source: impl Into<SourceId>) -> Option<&str> {
        let source = source.into();
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| *written == source)
            .map(|(_, value)| value.as_str())
    }

    /// All surfaced batches, in call order.
    pub fn surfaced(&self) -> &[Vec<SurfacedToggle>] {
        &self.surfaced
    }

    /// Every toggle ever surfaced, flattened across batches.
    pub fn surfaced_toggles(&self) -> impl Iterator<Item = &SurfacedToggle> + '_ {
        self.surfaced.iter().flatten()
    }

    /// Forget the write log (feed values stay).
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl RouteHost for MemoryHost {
    fn current_value(&mut self, source: &SourceId) -> Result<Option<String>, HostError> {
        Ok(self.feeds.get(source).cloned())
    }

    fn write_value(&mut self, source: &SourceId, value: &str) -> Result<(), HostError> {
        if self.fail_writes {
            return Err(HostError::Write {
                sink: source.clone(),
                message: "injected write failure".to_string(),
            });
        }
        self.writes.push((source.clone(), value.to_string()));
        // An accepted write shows up as the source's new state.
        self.feeds.insert(source.clone(), value.to_string());
        Ok(())
    }

    fn surface_toggles(&mut self, batch: &[SurfacedToggle]) -> Result<(), HostError> {
        self.surfaced.push(batch.to_vec());
        Ok(())
    }

    fn restore_visible(&mut self, key: &RouteKey) -> Option<bool> {
        self.restore.get(key).copied()
    }
}
