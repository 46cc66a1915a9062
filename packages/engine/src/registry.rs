//! Insertion-ordered registry of route toggles.

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexMap;
use routevis_wire::{RouteKey, RouteRecord};

use crate::toggle::{Toggle, ToggleState};

/// What [`ToggleRegistry::upsert`] did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Upserted {
    Created,
    Updated,
}

/// The collection of toggles for one coordinator, keyed by route key.
///
/// Iteration order is first-seen insertion order, which is also the order
/// the write-back encoder emits keys in. Toggles are never removed: a route
/// that leaves the catalog is marked not-present and keeps its slot, so a
/// later return finds it with visibility intact.
#[derive(Debug, Default)]
pub struct ToggleRegistry {
    toggles: IndexMap<RouteKey, Toggle>,
}

impl ToggleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    pub fn get(&self, key: &RouteKey) -> Option<&Toggle> {
        self.toggles.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &RouteKey) -> Option<&mut Toggle> {
        self.toggles.get_mut(key)
    }

    /// All toggles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Toggle> + '_ {
        self.toggles.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Toggle> + '_ {
        self.toggles.values_mut()
    }

    /// Create or update the toggle for a decoded record.
    ///
    /// An existing toggle adopts the record's display text and is marked
    /// present (the record just came out of the current catalog); its
    /// `visible` flag is left alone. A new toggle starts with the visibility
    /// `initial_visible` supplies - the closure runs only on creation, so
    /// restore lookups happen exactly once per route.
    pub(crate) fn upsert(
        &mut self,
        record: &RouteRecord,
        initial_visible: impl FnOnce() -> bool,
    ) -> (Upserted, &Toggle) {
        match self.toggles.entry(record.key.clone()) {
            Entry::Occupied(entry) => {
                let toggle = entry.into_mut();
                toggle.update_display_text(&record.display_text());
                toggle.set_present(true);
                (Upserted::Updated, toggle)
            }
            Entry::Vacant(entry) => {
                let toggle = entry.insert(Toggle::new(record, initial_visible()));
                (Upserted::Created, toggle)
            }
        }
    }

    /// Recompute presence for every toggle against a full catalog snapshot.
    ///
    /// Never touches `visible`.
    pub(crate) fn mark_presence<'k>(&mut self, current: impl IntoIterator<Item = &'k RouteKey>) {
        let current: HashSet<&RouteKey> = current.into_iter().collect();
        for toggle in self.toggles.values_mut() {
            toggle.set_present(current.contains(toggle.key()));
        }
    }

    /// Number of toggles that are both visible and in the current catalog.
    pub fn count_visible_present(&self) -> usize {
        self.toggles
            .values()
            .filter(|toggle| toggle.visible() && toggle.present())
            .count()
    }

    /// Keys of all non-visible toggles in insertion order, presence ignored.
    ///
    /// This is the write-back set: a hidden route that temporarily left the
    /// catalog must stay hidden when it returns, so departed toggles are
    /// included.
    pub fn hidden_keys(&self) -> impl Iterator<Item = &RouteKey> + '_ {
        self.toggles
            .values()
            .filter(|toggle| !toggle.visible())
            .map(Toggle::key)
    }

    /// Persistence snapshot of every toggle, in insertion order.
    pub fn snapshot(&self) -> Vec<ToggleState> {
        self.toggles.values().map(Toggle::state).collect()
    }
}
