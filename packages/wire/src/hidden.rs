//! Hidden-route set codec: `key;key;...` in both directions.

use std::collections::BTreeSet;

use crate::{is_sentinel, RouteKey};

/// The set of route keys a device currently hides.
///
/// Ordered so that [`encode_hidden`] emits a canonical string for a given
/// set regardless of how it was built up.
pub type HiddenSet = BTreeSet<RouteKey>;

/// Decode a hidden-route feed value into the set of hidden keys.
///
/// Sentinel values decode to the empty set (nothing hidden). Blank segments
/// from stray delimiters are dropped; surviving keys are whitespace-trimmed.
pub fn decode_hidden(raw: &str) -> HiddenSet {
    if is_sentinel(raw) {
        return HiddenSet::new();
    }
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(RouteKey::new)
        .collect()
}

/// Encode a set of hidden route keys for write-back.
///
/// An empty iterator encodes to the empty string, which decodes back to the
/// empty set.
pub fn encode_hidden<'a, I>(keys: I) -> String
where
    I: IntoIterator<Item = &'a RouteKey>,
{
    let mut out = String::new();
    for key in keys {
        debug_assert!(
            !key.as_str().contains(';'),
            "route key {key} contains the hidden-set delimiter"
        );
        if !out.is_empty() {
            out.push(';');
        }
        out.push_str(key.as_str());
    }
    out
}
