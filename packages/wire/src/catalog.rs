//! Route-catalog decoding across two firmware wire generations.
//!
//! The catalog feed describes routes as `key=name[|headsign]` entries. Older
//! firmware publishes a full `;`-separated snapshot on every change; newer
//! firmware streams one changed entry at a time. The two generations are
//! ambiguous on the wire (a single-entry value is also a valid one-entry
//! batch), so the caller declares which generation its feed speaks via
//! [`CatalogMode`] and the decode result keeps the distinction explicit as a
//! tagged [`CatalogUpdate`] instead of sniffing the string.

use serde::{Deserialize, Serialize};

use crate::{is_sentinel, RouteKey};

/// Declared wire generation of a catalog feed.
///
/// Tracked in per-instance configuration, never inferred from feed content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// One changed route per update: `key=name[|headsign]`.
    Single,
    /// Full snapshot per update: `key=name[|headsign];...` (legacy firmware,
    /// the more widespread generation, hence the default).
    #[default]
    Batch,
}

/// One route as described by the catalog feed.
///
/// Produced fresh on every decode and immutable from then on: a changed
/// display name shows up as a new record for the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Registry key, stable across updates for the same logical route.
    pub key: RouteKey,
    /// Human-readable route name.
    pub name: String,
    /// Optional headsign qualifier after the `|` separator.
    pub headsign: Option<String>,
}

impl RouteRecord {
    /// The text a toggle for this route displays: `name - headsign`, or just
    /// the name when no headsign was published.
    pub fn display_text(&self) -> String {
        match &self.headsign {
            Some(headsign) => format!("{} - {}", self.name, headsign),
            None => self.name.clone(),
        }
    }
}

/// Decode result for one catalog feed value, tagged by generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogUpdate {
    /// An incremental single-entry update; says nothing about other routes.
    Single(RouteRecord),
    /// A full snapshot; routes absent from it have left the catalog.
    Batch(Vec<RouteRecord>),
    /// Sentinel or content-free input. A reconciliation pass over this is a
    /// no-op; it must not retire existing routes.
    Empty,
}

impl CatalogUpdate {
    /// Check whether this update carries no records.
    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogUpdate::Empty)
    }

    /// The decoded records, in feed order.
    pub fn records(&self) -> &[RouteRecord] {
        match self {
            CatalogUpdate::Single(record) => std::slice::from_ref(record),
            CatalogUpdate::Batch(records) => records,
            CatalogUpdate::Empty => &[],
        }
    }
}

/// Decode a catalog feed value under the feed's declared generation.
///
/// Sentinel values (`"unknown"`, `"unavailable"`, the empty string) decode to
/// [`CatalogUpdate::Empty`], as does input that yields zero records after
/// skipping malformed segments — a snapshot that parsed to nothing carries no
/// information and must not be mistaken for "the device now has no routes".
///
/// # Example
///
/// ```rust
/// use routevis_wire::{decode_catalog, CatalogMode, CatalogUpdate};
///
/// let update = decode_catalog("r1:south=Downtown|South", CatalogMode::Single);
/// let CatalogUpdate::Single(record) = update else { panic!() };
/// assert_eq!(record.display_text(), "Downtown - South");
/// ```
pub fn decode_catalog(raw: &str, mode: CatalogMode) -> CatalogUpdate {
    if is_sentinel(raw) {
        return CatalogUpdate::Empty;
    }
    match mode {
        // The whole value after the first `=` belongs to the one record,
        // delimiter characters included.
        CatalogMode::Single => match decode_segment(raw) {
            Some(record) => CatalogUpdate::Single(record),
            None => CatalogUpdate::Empty,
        },
        CatalogMode::Batch => {
            let records: Vec<RouteRecord> = raw.split(';').filter_map(decode_segment).collect();
            if records.is_empty() {
                CatalogUpdate::Empty
            } else {
                CatalogUpdate::Batch(records)
            }
        }
    }
}

/// Decode one `key=name[|headsign]` segment.
///
/// Malformed segments (no `=`, empty key) yield `None`; the batch decoder
/// skips them without failing the rest of the snapshot.
fn decode_segment(segment: &str) -> Option<RouteRecord> {
    let (key, value) = segment.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let (name, headsign) = parse_value_field(value);
    Some(RouteRecord {
        key: RouteKey::new(key),
        name,
        headsign,
    })
}

/// Split a catalog value field into name and optional headsign.
///
/// Splits on the first `|`; both sides are whitespace-trimmed. An absent or
/// blank headsign comes back as `None`.
pub fn parse_value_field(value: &str) -> (String, Option<String>) {
    match value.split_once('|') {
        Some((name, headsign)) => {
            let headsign = headsign.trim();
            let headsign = (!headsign.is_empty()).then(|| headsign.to_string());
            (name.trim().to_string(), headsign)
        }
        None => (value.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(update: &CatalogUpdate) -> Vec<&str> {
        update.records().iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn single_entry_decodes_one_record() {
        let update = decode_catalog("r1:south=Downtown|South", CatalogMode::Single);
        let CatalogUpdate::Single(record) = &update else {
            panic!("expected single-entry update, got {update:?}");
        };
        assert_eq!(record.key.as_str(), "r1:south");
        assert_eq!(record.name, "Downtown");
        assert_eq!(record.headsign.as_deref(), Some("South"));
    }

    #[test]
    fn single_entry_keeps_delimiters_in_the_value() {
        // A name containing `;` is legal in single-entry mode - the value is
        // everything after the first `=`.
        let update = decode_catalog("r1=Main St; Express", CatalogMode::Single);
        let CatalogUpdate::Single(record) = &update else {
            panic!("expected single-entry update, got {update:?}");
        };
        assert_eq!(record.name, "Main St; Express");
    }

    #[test]
    fn batch_decodes_in_feed_order() {
        let update = decode_catalog("a=Alpha;b=Beta;c=Gamma", CatalogMode::Batch);
        assert_eq!(keys(&update), ["a", "b", "c"]);
    }

    #[test]
    fn batch_skips_malformed_segments() {
        let update = decode_catalog("a=Alpha;no equals sign;=NoKey;b=Beta", CatalogMode::Batch);
        assert_eq!(keys(&update), ["a", "b"]);
    }

    #[test]
    fn batch_trims_segment_whitespace() {
        let update = decode_catalog(" a = Alpha ; b = Beta ", CatalogMode::Batch);
        let records = update.records();
        assert_eq!(records[0].key.as_str(), "a");
        assert_eq!(records[0].name, "Alpha");
        assert_eq!(records[1].key.as_str(), "b");
        assert_eq!(records[1].name, "Beta");
    }

    #[test]
    fn empty_name_is_not_malformed() {
        // The key is required; the display name may legitimately be blank.
        let update = decode_catalog("a=", CatalogMode::Batch);
        let records = update.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "");
    }

    #[test]
    fn sentinels_decode_to_empty() {
        for raw in ["", "unknown", "unavailable"] {
            assert!(decode_catalog(raw, CatalogMode::Single).is_empty(), "{raw:?}");
            assert!(decode_catalog(raw, CatalogMode::Batch).is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn all_garbage_batch_decodes_to_empty() {
        assert!(decode_catalog(";;;", CatalogMode::Batch).is_empty());
        assert!(decode_catalog("no equals at all", CatalogMode::Batch).is_empty());
    }

    #[test]
    fn malformed_single_entry_decodes_to_empty() {
        assert!(decode_catalog("no equals", CatalogMode::Single).is_empty());
        assert!(decode_catalog("=missing key", CatalogMode::Single).is_empty());
    }

    #[test]
    fn value_field_splits_on_first_pipe() {
        assert_eq!(
            parse_value_field("Downtown | South"),
            ("Downtown".to_string(), Some("South".to_string()))
        );
        assert_eq!(
            parse_value_field("A|B|C"),
            ("A".to_string(), Some("B|C".to_string()))
        );
    }

    #[test]
    fn blank_headsign_is_none() {
        assert_eq!(parse_value_field("Downtown|"), ("Downtown".to_string(), None));
        assert_eq!(parse_value_field("Downtown| "), ("Downtown".to_string(), None));
        assert_eq!(parse_value_field("Downtown"), ("Downtown".to_string(), None));
    }

    #[test]
    fn display_text_joins_name_and_headsign() {
        let with = RouteRecord {
            key: RouteKey::new("r1"),
            name: "Downtown".to_string(),
            headsign: Some("South".to_string()),
        };
        assert_eq!(with.display_text(), "Downtown - South");

        let without = RouteRecord {
            key: RouteKey::new("r1"),
            name: "Downtown".to_string(),
            headsign: None,
        };
        assert_eq!(without.display_text(), "Downtown");
    }

    #[test]
    fn catalog_mode_serde_is_lowercase_with_batch_default() {
        assert_eq!(serde_json::to_string(&CatalogMode::Single).unwrap(), "\"single\"");
        assert_eq!(serde_json::to_string(&CatalogMode::Batch).unwrap(), "\"batch\"");
        assert_eq!(CatalogMode::default(), CatalogMode::Batch);
    }

    #[test]
    fn records_view_covers_all_variants() {
        assert_eq!(CatalogUpdate::Empty.records().len(), 0);
        let single = decode_catalog("a=Alpha", CatalogMode::Single);
        assert_eq!(single.records().len(), 1);
        let batch = decode_catalog("a=Alpha;b=Beta", CatalogMode::Batch);
        assert_eq!(batch.records().len(), 2);
    }
}
