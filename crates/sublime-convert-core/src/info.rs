//! Theme metadata extraction.

use tracing::debug;

use crate::error::Result;
use crate::keys::normalize_key;
use crate::record::{zip_fields, FlatRecord};
use crate::tree::ThemeTree;

/// Builds the metadata record from the theme's top-level dictionaries.
///
/// The `settings` key (which introduces the rules array) is skipped, keys are
/// normalized, and the `uuid` pair is dropped. Fields from later
/// dictionaries overwrite earlier ones.
pub fn extract_info(tree: &ThemeTree<'_>) -> Result<FlatRecord> {
    let mut info = FlatRecord::new();

    for dict in tree.dicts() {
        let mut keys: Vec<String> = dict
            .keys()
            .filter(|key| *key != "settings")
            .map(normalize_key)
            .collect();
        let mut values: Vec<Option<&str>> = dict.strings().collect();

        strip_uuid(&mut keys, &mut values);
        info.merge(zip_fields("theme metadata", &keys, &values, None)?);
    }

    debug!(fields = info.len(), "extracted theme metadata");
    Ok(info)
}

/// Removes `uuid` keys and the value at the same position.
///
/// Only positions before the last key (as counted on entry) are checked, so a
/// trailing `uuid` key survives. After a removal the scan moves on to the
/// next index without revisiting the element that shifted into place.
fn strip_uuid(keys: &mut Vec<String>, values: &mut Vec<Option<&str>>) {
    let last = keys.len().saturating_sub(1);
    for index in 0..last {
        if keys.get(index).is_some_and(|key| key == "uuid") {
            keys.remove(index);
            if index < values.len() {
                values.remove(index);
            }
        }
    }
}
