//! User-initiated visibility commands and the last-visible-route guard.

use routevis_wire::RouteKey;

use crate::config::CoordinatorConfig;
use crate::error::{EngineError, Result};
use crate::host::RouteHost;
use crate::publish::publish;
use crate::registry::ToggleRegistry;

/// Outcome of a visibility command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The command took effect (or re-asserted the state it asked for).
    Applied,
    /// Turning off was refused to keep at least one route visible.
    Refused,
}

/// One visibility command's view of the coordinator's state.
pub(crate) struct VisibilityController<'a, H> {
    pub(crate) registry: &'a mut ToggleRegistry,
    pub(crate) host: &'a mut H,
    pub(crate) config: &'a CoordinatorConfig,
}

impl<H: RouteHost> VisibilityController<'_, H> {
    /// Show a route. Always safe, so it always applies, and the result is
    /// published even when the flag was already set - the device's copy
    /// stays authoritative.
    pub(crate) fn turn_on(&mut self, key: &RouteKey) -> Result<SwitchOutcome> {
        let Some(toggle) = self.registry.get_mut(key) else {
            return Err(EngineError::UnknownRoute(key.clone()));
        };
        toggle.set_visible(true);
        publish(self.registry, self.host, self.config.hidden_source.as_ref())?;
        Ok(SwitchOutcome::Applied)
    }

    /// Hide a route, unless that would leave nothing visible.
    ///
    /// The guard runs before anything else: whenever at most one
    /// catalog-present toggle is still visible, the command is refused with
    /// a warning - even a re-assertion of an already-hidden state. This is
    /// the only enforcement point for the invariant; external hidden-feed
    /// changes bypass it.
    pub(crate) fn turn_off(&mut self, key: &RouteKey) -> Result<SwitchOutcome> {
        if self.registry.get(key).is_none() {
            return Err(EngineError::UnknownRoute(key.clone()));
        }
        if self.registry.count_visible_present() <= 1 {
            tracing::warn!(
                "Cannot hide route {}: at least one route must remain visible",
                key
            );
            return Ok(SwitchOutcome::Refused);
        }
        if let Some(toggle) = self.registry.get_mut(key) {
            toggle.set_visible(false);
        }
        publish(self.registry, self.host, self.config.hidden_source.as_ref())?;
        Ok(SwitchOutcome::Applied)
    }
}
