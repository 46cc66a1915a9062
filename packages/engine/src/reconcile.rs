//! Per-feed reconciliation passes over the toggle registry.
//!
//! Each feed triggers its own pass; there is no cross-feed ordering
//! guarantee. A pass that needs the other feed's content reads that feed's
//! latest cached value through the host at the instant of processing.

use routevis_wire::{decode_catalog, decode_hidden, CatalogUpdate, HiddenSet};

use crate::config::CoordinatorConfig;
use crate::error::Result;
use crate::host::{RouteHost, SurfacedToggle};
use crate::registry::{ToggleRegistry, Upserted};

/// One reconciliation pass's view of the coordinator's state.
pub(crate) struct Reconciler<'a, H> {
    pub(crate) registry: &'a mut ToggleRegistry,
    pub(crate) host: &'a mut H,
    pub(crate) config: &'a CoordinatorConfig,
}

impl<H: RouteHost> Reconciler<'_, H> {
    /// Run one catalog pass: upsert every decoded record, surface the batch
    /// of newly created toggles, and (for full snapshots) recompute
    /// presence.
    ///
    /// New toggles start from the host's restored visibility when one
    /// exists, else from the hidden feed's current content. Existing
    /// toggles' visibility is never touched here.
    pub(crate) fn apply_catalog(&mut self, raw: &str) -> Result<()> {
        let update = decode_catalog(raw, self.config.catalog_mode);
        if update.is_empty() {
            tracing::debug!("Catalog update carried no records, nothing to apply");
            return Ok(());
        }
        tracing::debug!("Parsed {} routes from the catalog feed", update.records().len());

        let hidden = self.read_hidden()?;
        let Reconciler { registry, host, .. } = self;

        let mut created: Vec<SurfacedToggle> = Vec::new();
        for record in update.records() {
            let (outcome, toggle) = registry.upsert(record, || {
                host.restore_visible(&record.key)
                    .unwrap_or_else(|| !hidden.contains(&record.key))
            });
            if outcome == Upserted::Created {
                created.push(toggle.surfaced());
            }
        }

        if !created.is_empty() {
            tracing::debug!("Surfacing {} new route toggles", created.len());
            host.surface_toggles(&created)?;
        }

        // Only a full snapshot says anything about routes it does not name.
        if let CatalogUpdate::Batch(records) = &update {
            registry.mark_presence(records.iter().map(|r| &r.key));
        }
        Ok(())
    }

    /// Run one hidden pass: flip every toggle whose visibility disagrees
    /// with the externally asserted hidden set.
    ///
    /// No last-visible guard on this path. The device already applied this
    /// state, so it is reflected as-is, even when it leaves nothing visible.
    /// Nothing is written back either: the value came from the device.
    pub(crate) fn apply_hidden(&mut self, raw: &str) {
        let hidden = decode_hidden(raw);
        let mut flipped = 0usize;
        for toggle in self.registry.iter_mut() {
            let should_be_visible = !hidden.contains(toggle.key());
            if toggle.set_visible(should_be_visible) {
                flipped += 1;
            }
        }
        if flipped > 0 {
            tracing::debug!("External hidden-route change flipped {} toggles", flipped);
        }
    }

    /// The hidden feed's current content, read at the instant of the pass.
    fn read_hidden(&mut self) -> Result<HiddenSet> {
        let Some(source) = &self.config.hidden_source else {
            return Ok(HiddenSet::new());
        };
        let raw = self.host.current_value(source)?;
        Ok(raw.as_deref().map(decode_hidden).unwrap_or_default())
    }
}
