//! The assembled color-scheme document.

use indexmap::IndexMap;
use serde::Serialize;

use crate::palette::Palette;
use crate::record::{FlatRecord, Rule};

/// A value in the top-level document map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocValue {
    Text(String),
    Record(FlatRecord),
    Rules(Vec<Rule>),
}

/// An ordered `.sublime-color-scheme` document.
///
/// Serializes as a JSON object whose keys keep insertion order: metadata
/// first, then `variables`, `globals` and `rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, DocValue>);

impl Document {
    /// Merges the pipeline's outputs in their fixed order.
    ///
    /// The palette's reference table is dropped here. A metadata field named
    /// `variables`, `globals` or `rules` is overwritten by the reserved entry.
    pub fn assemble(
        info: FlatRecord,
        palette: Palette,
        globals: FlatRecord,
        rules: Vec<Rule>,
    ) -> Self {
        let mut fields: IndexMap<String, DocValue> = info
            .iter()
            .map(|(key, value)| (key.to_string(), DocValue::Text(value.to_string())))
            .collect();
        fields.insert("variables".into(), DocValue::Record(palette.into_variables()));
        fields.insert("globals".into(), DocValue::Record(globals));
        fields.insert("rules".into(), DocValue::Rules(rules));
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.0.get(key)
    }

    /// Top-level keys in output order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn variables(&self) -> Option<&FlatRecord> {
        match self.0.get("variables") {
            Some(DocValue::Record(record)) => Some(record),
            _ => None,
        }
    }

    pub fn globals(&self) -> Option<&FlatRecord> {
        match self.0.get("globals") {
            Some(DocValue::Record(record)) => Some(record),
            _ => None,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        match self.0.get("rules") {
            Some(DocValue::Rules(rules)) => rules,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assemble_order() {
        let doc = Document::assemble(
            FlatRecord::from_iter([("name", "Sample"), ("author", "Someone")]),
            Palette::from_literals(["#000000"]),
            FlatRecord::from_iter([("background", "var(color00)")]),
            vec![FlatRecord::from_iter([("scope", "comment")])],
        );

        assert_eq!(
            doc.keys().collect::<Vec<_>>(),
            vec!["name", "author", "variables", "globals", "rules"]
        );
    }

    #[test]
    fn test_serializes_in_order() {
        let doc = Document::assemble(
            FlatRecord::from_iter([("name", "Sample")]),
            Palette::from_literals(["#000000", "#00000080"]),
            FlatRecord::new(),
            vec![],
        );

        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r##"{"name":"Sample","variables":{"color00":"#000000","color01":"color(var(color00) alpha(0.50))"},"globals":{},"rules":[]}"##
        );
    }

    #[test]
    fn test_reserved_names_win_collisions() {
        let doc = Document::assemble(
            FlatRecord::from_iter([("rules", "oops"), ("name", "Sample")]),
            Palette::default(),
            FlatRecord::new(),
            vec![],
        );

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"rules": [], "name": "Sample", "variables": {}, "globals": {}})
        );
        assert!(doc.rules().is_empty());
    }
}
