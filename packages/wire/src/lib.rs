//! Wire-format codec for the routevis stack.
//!
//! This is the pure-string layer. Everything here is stateless text
//! transformation - no registry, no host I/O, no visibility policy. The two
//! feeds a transit display publishes both flow through here:
//!
//! - the **catalog** feed, `key=name[|headsign]` entries describing the
//!   routes the device knows about (single-entry or `;`-joined batch,
//!   depending on firmware generation), and
//! - the **hidden** feed, a `;`-joined list of route keys the device is not
//!   currently displaying.
//!
//! Decoding is total: sentinel values and malformed input come back as empty
//! updates rather than errors, because a feed observation that cannot be
//! parsed carries no information and must not disturb existing state.
//!
//! # Example
//!
//! ```rust
//! use routevis_wire::{decode_catalog, decode_hidden, CatalogMode};
//!
//! let update = decode_catalog("r1=Downtown|South;r2=Airport", CatalogMode::Batch);
//! assert_eq!(update.records().len(), 2);
//!
//! let hidden = decode_hidden("r2");
//! assert!(hidden.contains(&"r2".into()));
//! ```

mod catalog;
mod hidden;
mod key;

pub use catalog::{decode_catalog, parse_value_field, CatalogMode, CatalogUpdate, RouteRecord};
pub use hidden::{decode_hidden, encode_hidden, HiddenSet};
pub use key::RouteKey;

/// Check whether a raw feed value is a sentinel rather than data.
///
/// Feeds report `"unknown"` before their first observation and
/// `"unavailable"` while the device is offline; the empty string carries no
/// data either. The match is exact - a route named `unknown` inside a larger
/// value is not a sentinel.
pub fn is_sentinel(raw: &str) -> bool {
    matches!(raw, "" | "unknown" | "unavailable")
}
