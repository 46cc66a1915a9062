//! The per-route toggle entity.

use routevis_wire::{RouteKey, RouteRecord};
use serde::{Deserialize, Serialize};

use crate::host::SurfacedToggle;

/// One route's visibility toggle.
///
/// Created the first time its key shows up in a catalog decode and kept for
/// the engine's lifetime. Fields are only mutated through the registry by
/// the reconciliation passes and the visibility controller; catalog updates
/// touch display text and presence, never `visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    key: RouteKey,
    display_text: String,
    visible: bool,
    present: bool,
}

impl Toggle {
    /// Build a toggle for a freshly seen route. Presence starts true - the
    /// record that created it came out of the current catalog.
    pub(crate) fn new(record: &RouteRecord, visible: bool) -> Self {
        Toggle {
            key: record.key.clone(),
            display_text: record.display_text(),
            visible,
            present: true,
        }
    }

    pub fn key(&self) -> &RouteKey {
        &self.key
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Whether the route is shown on the device.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the key appeared in the latest decoded catalog snapshot.
    pub fn present(&self) -> bool {
        self.present
    }

    /// Set visibility, reporting whether the flag actually flipped.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Set catalog presence, reporting whether it changed.
    pub(crate) fn set_present(&mut self, present: bool) -> bool {
        let changed = self.present != present;
        self.present = present;
        changed
    }

    /// Adopt a new display text, reporting whether it changed.
    pub(crate) fn update_display_text(&mut self, display_text: &str) -> bool {
        if self.display_text == display_text {
            return false;
        }
        self.display_text = display_text.to_string();
        true
    }

    /// The creation notification handed to the host for this toggle.
    pub(crate) fn surfaced(&self) -> SurfacedToggle {
        SurfacedToggle {
            key: self.key.clone(),
            display_text: self.display_text.clone(),
            visible: self.visible,
        }
    }

    /// Serializable persistence record for this toggle.
    pub fn state(&self) -> ToggleState {
        ToggleState {
            key: self.key.clone(),
            visible: self.visible,
        }
    }
}

/// What a host persists per toggle to answer `restore_visible` after a
/// restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    pub key: RouteKey,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, name: &str) -> RouteRecord {
        RouteRecord {
            key: RouteKey::new(key),
            name: name.to_string(),
            headsign: None,
        }
    }

    #[test]
    fn new_toggle_is_present() {
        let toggle = Toggle::new(&record("r1", "Downtown"), true);
        assert_eq!(toggle.key().as_str(), "r1");
        assert_eq!(toggle.display_text(), "Downtown");
        assert!(toggle.visible());
        assert!(toggle.present());
    }

    #[test]
    fn set_visible_reports_flips_only() {
        let mut toggle = Toggle::new(&record("r1", "Downtown"), true);
        assert!(!toggle.set_visible(true));
        assert!(toggle.set_visible(false));
        assert!(!toggle.visible());
    }

    #[test]
    fn display_text_update_is_guarded() {
        let mut toggle = Toggle::new(&record("r1", "Downtown"), true);
        assert!(!toggle.update_display_text("Downtown"));
        assert!(toggle.update_display_text("Uptown"));
        assert_eq!(toggle.display_text(), "Uptown");
    }

    #[test]
    fn surfaced_carries_creation_fields() {
        let toggle = Toggle::new(&record("r1", "Downtown"), false);
        let surfaced = toggle.surfaced();
        assert_eq!(surfaced.key.as_str(), "r1");
        assert_eq!(surfaced.display_text, "Downtown");
        assert!(!surfaced.visible);
    }

    #[test]
    fn state_serializes_for_persistence() {
        let toggle = Toggle::new(&record("r1", "Downtown"), true);
        let json = serde_json::to_string(&toggle.state()).unwrap();
        assert_eq!(json, r#"{"key":"r1","visible":true}"#);
    }
}
