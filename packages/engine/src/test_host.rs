//! Test host implementation for in-crate engine testing.
//!
//! This module provides a test implementation of the `RouteHost` trait with
//! in-memory feeds and a write log. The full-featured `routevis-mem` host
//! serves the integration tests; unit tests inside this crate need a host
//! compiled in the same crate instantiation, which is this one.

use std::collections::HashMap;

use routevis_wire::RouteKey;

use crate::config::SourceId;
use crate::host::{HostError, RouteHost, SurfacedToggle};

/// Test host with in-memory feeds.
///
/// Feed values are set directly; writes are logged and echoed back into the
/// written source's feed value, the way a device reports an accepted write
/// through its state.
#[derive(Debug, Default)]
pub struct TestHost {
    /// Current value per source.
    feeds: HashMap<SourceId, String>,
    /// Every accepted write, in call order.
    writes: Vec<(SourceId, String)>,
    /// Every surfaced batch, in call order.
    surfaced: Vec<Vec<SurfacedToggle>>,
}

impl TestHost {
    /// Create a host with no feeds and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feed's current value, as if the device published it.
    pub fn set_feed(&mut self, source: impl Into<SourceId>, value: impl Into<String>) {
        self.feeds.insert(source.into(), value.into());
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

    /// Forget the write log (feed values stay).
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl RouteHost for TestHost {
    fn current_value(&mut self, source: &SourceId) -> Result<Option<String>, HostError> {
        Ok(self.feeds.get(source).cloned())
    }

    fn write_value(&mut self, source: &SourceId, value: &str) -> Result<(), HostError> {
        self.writes.push((source.clone(), value.to_string()));
        self.feeds.insert(source.clone(), value.to_string());
        Ok(())
    }

    fn surface_toggles(&mut self, batch: &[SurfacedToggle]) -> Result<(), HostError> {
        self.surfaced.push(batch.to_vec());
        Ok(())
    }

    fn restore_visible(&mut self, _key: &RouteKey) -> Option<bool> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_host_is_empty() {
        let mut host = TestHost::new();
        assert!(host.current_value(&"feed".into()).unwrap().is_none());
        assert!(host.writes().is_empty());
        assert!(host.surfaced().is_empty());
    }

    #[test]
    fn set_feed_is_readable() {
        let mut host = TestHost::new();
        host.set_feed("catalog", "a=Alpha");
        assert_eq!(
            host.current_value(&"catalog".into()).unwrap().as_deref(),
            Some("a=Alpha")
        );
    }

    #[test]
    fn accepted_write_is_logged_and_echoed() {
        let mut host = TestHost::new();
        host.write_value(&"hidden".into(), "a").unwrap();
        host.write_value(&"hidden".into(), "a;b").unwrap();

        assert_eq!(host.writes().len(), 2);
        assert_eq!(host.last_write("hidden"), Some("a;b"));
        assert_eq!(
            host.current_value(&"hidden".into()).unwrap().as_deref(),
            Some("a;b")
        );
    }

    #[test]
    fn clear_writes_keeps_feed_values() {
        let mut host = TestHost::new();
        host.write_value(&"hidden".into(), "a").unwrap();
        host.clear_writes();

        assert!(host.writes().is_empty());
        assert_eq!(host.last_write("hidden"), None);
        assert_eq!(
            host.current_value(&"hidden".into()).unwrap().as_deref(),
            Some("a")
        );
    }
}
