//! Flat key/value records and the positional field zipper.
//!
//! Theme dictionaries store keys and values as interleaved siblings, but the
//! extractors read them as two separate lists: every `<key>` child and every
//! `<string>` child. [`zip_fields`] pairs those lists back up by position.
//!
//! # Overflow
//!
//! Source themes sometimes carry one more value than they have keys. When
//! that happens the last key takes the last value *verbatim*: no color
//! resolution and no trimming, overwriting whatever the positional pass
//! stored there. Existing converted themes depend on this, so it is kept even
//! though it can clobber a field with an unrelated value.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::palette::Palette;

/// An insertion-ordered map of normalized keys to string values.
///
/// Overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatRecord(IndexMap<String, String>);

/// One scope-styling entry of the theme.
pub type Rule = FlatRecord;

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.0.values_mut()
    }

    /// Copies every field of `other` into this record; later fields win.
    pub fn merge(&mut self, other: FlatRecord) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Pairs keys with values by position.
///
/// For each index present in both lists, a present value is stored under its
/// key: resolved against `palette` when one is given, otherwise trimmed. An
/// absent value leaves that key unset but still uses up its slot.
///
/// If `values` is longer than `keys`, the last key is then overwritten with
/// the raw text of the last value (see the module docs). An absent last value
/// leaves the field as the positional pass set it.
///
/// # Errors
///
/// [`ConvertError::MissingKeys`] when there are values but no keys, since
/// the overflow has nowhere to go. `context` names the caller in the message.
pub fn zip_fields<K: AsRef<str>>(
    context: &'static str,
    keys: &[K],
    values: &[Option<&str>],
    palette: Option<&Palette>,
) -> Result<FlatRecord> {
    let mut record = FlatRecord::new();

    for (key, value) in keys.iter().zip(values) {
        let Some(value) = value else { continue };
        let stored = match palette {
            Some(palette) => palette.resolve(value),
            None => value.trim().to_string(),
        };
        record.insert(key.as_ref(), stored);
    }

    if values.len() > keys.len() {
        let last_key = keys.last().ok_or(ConvertError::MissingKeys {
            context,
            values: values.len(),
        })?;
        if let Some(Some(raw)) = values.last() {
            record.insert(last_key.as_ref(), *raw);
        }
    }

    Ok(record)
}
