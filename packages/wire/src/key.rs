//! Composite route keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiter between the sub-fields of a composite key.
const SUBFIELD_DELIMITER: char = ':';

/// An opaque composite identifier for one logical route.
///
/// A key is stable across updates for the same logical route and serves as
/// the registry's primary key. Firmware builds keys from up to three
/// sub-fields (`routeId[:headsign][:stopId]`), but the codec never interprets
/// that structure: equality is exact string equality of the composite, and a
/// bare route identifier is a perfectly good key.
///
/// # Example
///
/// ```rust
/// use routevis_wire::RouteKey;
///
/// let key = RouteKey::compose("r1", Some("south"), None);
/// assert_eq!(key.as_str(), "r1:south");
/// assert_eq!(key.route_id(), "r1");
/// assert_eq!(key.headsign(), Some("south"));
/// assert_eq!(key.stop_id(), None);
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    /// Create a key from its composite string form.
    pub fn new(raw: impl Into<String>) -> Self {
        RouteKey(raw.into())
    }

    /// Build a key from its sub-fields.
    ///
    /// Sub-fields are positional: supplying a `stop_id` without a `headsign`
    /// produces a two-field key whose second field reads back as a headsign.
    pub fn compose(route_id: &str, headsign: Option<&str>, stop_id: Option<&str>) -> Self {
        let mut raw = String::from(route_id);
        for part in [headsign, stop_id].into_iter().flatten() {
            raw.push(SUBFIELD_DELIMITER);
            raw.push_str(part);
        }
        RouteKey(raw)
    }

    /// The composite string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first sub-field (the bare route identifier).
    pub fn route_id(&self) -> &str {
        match self.0.split_once(SUBFIELD_DELIMITER) {
            Some((route_id, _)) => route_id,
            None => &self.0,
        }
    }

    /// The second sub-field, if the key carries one.
    pub fn headsign(&self) -> Option<&str> {
        self.0.split(SUBFIELD_DELIMITER).nth(1)
    }

    /// The third sub-field, if the key carries one.
    pub fn stop_id(&self) -> Option<&str> {
        self.0.split(SUBFIELD_DELIMITER).nth(2)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RouteKey {
    fn from(raw: &str) -> Self {
        RouteKey::new(raw)
    }
}

impl From<String> for RouteKey {
    fn from(raw: String) -> Self {
        RouteKey(raw)
    }
}
