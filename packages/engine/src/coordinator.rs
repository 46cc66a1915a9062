//! The per-display coordinator owning registry, host handle, and config.

use routevis_wire::RouteKey;

use crate::config::CoordinatorConfig;
use crate::error::Result;
use crate::host::RouteHost;
use crate::reconcile::Reconciler;
use crate::registry::ToggleRegistry;
use crate::toggle::ToggleState;
use crate::visibility::{SwitchOutcome, VisibilityController};

/// Reconciliation engine for one tracked transit display.
///
/// One value of this type exists per configured source pair; everything for
/// that display (feed updates, user commands, the toggle registry) flows
/// through it. All handlers are call-and-return on `&mut self`: the host
/// owns the event loop and must deliver triggers one at a time, behind a
/// mutex or single-threaded queue if its runtime is concurrent.
#[derive(Debug)]
pub struct RouteCoordinator<H> {
    registry: ToggleRegistry,
    host: H,
    config: CoordinatorConfig,
}

impl<H: RouteHost> RouteCoordinator<H> {
    /// Build a coordinator with an empty registry. Call [`start`] to pick
    /// up the feeds' current values.
    ///
    /// [`start`]: RouteCoordinator::start
    pub fn new(host: H, config: CoordinatorConfig) -> Self {
        RouteCoordinator {
            registry: ToggleRegistry::new(),
            host,
            config,
        }
    }

    /// Read the catalog feed's current value and reconcile as if freshly
    /// started.
    ///
    /// The catalog pass consults the hidden feed and the host's restore
    /// data while creating toggles, so one pass rebuilds the whole registry
    /// after a restart. A standalone hidden pass runs only on hidden-feed
    /// change events - running one here would overwrite restored
    /// visibility.
    pub fn start(&mut self) -> Result<()> {
        let catalog = self.host.current_value(&self.config.catalog_source)?;
        tracing::debug!(
            "Initial catalog value on {}: {:?}",
            self.config.catalog_source,
            catalog
        );
        if let Some(raw) = catalog {
            self.on_catalog_change(&raw)?;
        }
        Ok(())
    }

    /// Feed-update handler for the catalog source.
    pub fn on_catalog_change(&mut self, raw: &str) -> Result<()> {
        self.reconciler().apply_catalog(raw)
    }

    /// Feed-update handler for the hidden source.
    pub fn on_hidden_change(&mut self, raw: &str) {
        self.reconciler().apply_hidden(raw)
    }

    /// User command: show a route.
    pub fn turn_on(&mut self, key: &RouteKey) -> Result<SwitchOutcome> {
        self.controller().turn_on(key)
    }

    /// User command: hide a route.
    pub fn turn_off(&mut self, key: &RouteKey) -> Result<SwitchOutcome> {
        self.controller().turn_off(key)
    }

    pub fn registry(&self) -> &ToggleRegistry {
        &self.registry
    }

    /// The source pair and catalog mode this coordinator was built with.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Persistence snapshot of every toggle, for the host to answer
    /// `restore_visible` from after a restart.
    pub fn snapshot(&self) -> Vec<ToggleState> {
        self.registry.snapshot()
    }

    fn reconciler(&mut self) -> Reconciler<'_, H> {
        Reconciler {
            registry: &mut self.registry,
            host: &mut self.host,
            config: &self.config,
        }
    }

    fn controller(&mut self) -> VisibilityController<'_, H> {
        VisibilityController {
            registry: &mut self.registry,
            host: &mut self.host,
            config: &self.config,
        }
    }
}
