//! Host contract for the reconciliation engine.
//!
//! This module defines the interface between the engine core and its host
//! environment. The core interacts with feeds, the write-back sink, and the
//! host's toggle surface only through the [`RouteHost`] trait, allowing
//! different hosts (a home-automation bus bridge, the in-memory test host) to
//! provide their own implementations.

use routevis_wire::RouteKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SourceId;

/// Error type for host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// Writing a value to a sink failed.
    #[error("write to {sink} failed: {message}")]
    Write {
        /// The sink the write was addressed to.
        sink: SourceId,
        /// Host-side failure description.
        message: String,
    },

    /// Any other host-side failure.
    #[error("host error: {0}")]
    Other(String),
}

/// A newly created toggle, as handed to the host's entity system.
///
/// Carries everything the host needs to present the toggle: the stable key
/// it is addressed by, the text to display, and the visibility it starts
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfacedToggle {
    pub key: RouteKey,
    pub display_text: String,
    pub visible: bool,
}

/// Host interface for the reconciliation engine.
///
/// The engine calls these methods to read feeds, push the encoded hidden set
/// back to the device, and hand new toggles to whatever presents them.
/// Feed-change subscription runs the other way around: the host owns the
/// event loop and invokes the coordinator's `on_catalog_change` /
/// `on_hidden_change` handlers, one at a time.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn RouteHost>`.
pub trait RouteHost {
    /// Read a feed's last known value.
    ///
    /// Returns `Ok(None)` when the source is unknown to the host; the engine
    /// treats that the same as an empty feed. Sentinel strings such as
    /// `"unknown"` are values, not `None` - the codec handles those.
    fn current_value(&mut self, source: &SourceId) -> Result<Option<String>, HostError>;

    /// Push an encoded value to a sink on the device.
    fn write_value(&mut self, source: &SourceId, value: &str) -> Result<(), HostError>;

    /// Register newly created toggles with the host's entity system.
    ///
    /// Called once per creation batch, never with an empty batch.
    fn surface_toggles(&mut self, batch: &[SurfacedToggle]) -> Result<(), HostError>;

    /// Previously persisted visibility for a key, if the host kept one.
    ///
    /// Consulted once per toggle, at creation. `None` means no persisted
    /// value; the engine falls back to the hidden feed's current content.
    fn restore_visible(&mut self, key: &RouteKey) -> Option<bool>;
}

// Blanket implementations for references and boxes

impl<T: RouteHost + ?Sized> RouteHost for &mut T {
    fn current_value(&mut self, source: &SourceId) -> Result<Option<String>, HostError> {
        (*self).current_value(source)
    }

    fn write_value(&mut self, source: &SourceId, value: &str) -> Result<(), HostError> {
        (*self).write_value(source, value)
    }

    fn surface_toggles(&mut self, batch: &[SurfacedToggle]) -> Result<(), HostError> {
        (*self).surface_toggles(batch)
    }

    fn restore_visible(&mut self, key: &RouteKey) -> Option<bool> {
        (*self).restore_visible(key)
    }
}

impl<T: RouteHost + ?Sized> RouteHost for Box<T> {
    fn current_value(&mut self, source: &SourceId) -> Result<Option<String>, HostError> {
        self.as_mut().current_value(source)
    }

    fn write_value(&mut self, source: &SourceId, value: &str) -> Result<(), HostError> {
        self.as_mut().write_value(source, value)
    }

    fn surface_toggles(&mut self, batch: &[SurfacedToggle]) -> Result<(), HostError> {
        self.as_mut().surface_toggles(batch)
    }

    fn restore_visible(&mut self, key: &RouteKey) -> Option<bool> {
        self.as_mut().restore_visible(key)
    }
}
