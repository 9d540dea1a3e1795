//! Scope rule extraction.

use sublime_convert_plist::Node;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::keys::normalize_key;
use crate::palette::Palette;
use crate::record::{zip_fields, Rule};

/// Converts each remaining rules-array entry into a flat [`Rule`].
///
/// The entry's own fields (`name`, `scope`, ...) are zipped as plain text,
/// with a trailing `settings` key left out. Every nested dictionary is then
/// zipped with normalized keys and color resolution, and merged into the
/// same rule. Source order is preserved.
///
/// # Errors
///
/// [`ConvertError::RuleWithoutKeys`] for an entry with no keys, and anything
/// the field zipper reports.
pub fn extract_rules(entries: &[&Node], palette: &Palette) -> Result<Vec<Rule>> {
    let mut rules = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let mut keys: Vec<&str> = entry.keys().collect();
        match keys.last() {
            None => return Err(ConvertError::RuleWithoutKeys { index }),
            Some(&"settings") => {
                keys.pop();
            }
            Some(_) => {}
        }
        let values: Vec<Option<&str>> = entry.strings().collect();
        let mut rule = zip_fields("rule", &keys, &values, None)?;

        for settings in entry.dicts() {
            let keys: Vec<String> = settings.keys().map(normalize_key).collect();
            let values: Vec<Option<&str>> = settings.strings().collect();
            rule.merge(zip_fields("rule settings", &keys, &values, Some(palette))?);
        }

        rules.push(rule);
    }

    debug!(rules = rules.len(), "extracted rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FlatRecord;

    fn s(text: &str) -> Node {
        Node::Str(Some(text.to_string()))
    }

    fn k(text: &str) -> Node {
        Node::Key(text.to_string())
    }

    #[test]
    fn test_rule_merges_resolved_settings() {
        let palette = Palette::from_literals(["#75715E", "#F92672"]);
        let entry = Node::Dict(vec![
            k("name"),
            s("Comment"),
            k("scope"),
            s("comment"),
            k("settings"),
            Node::Dict(vec![k("foreground"), s("#75715E"), k("fontStyle"), s(" italic ")]),
        ]);

        let rules = extract_rules(&[&entry], &palette).unwrap();
        assert_eq!(
            rules,
            vec![FlatRecord::from_iter([
                ("name", "Comment"),
                ("scope", "comment"),
                ("foreground", "var(color00)"),
                ("font_style", "italic"),
            ])]
        );
    }

    #[test]
    fn test_top_level_fields_are_not_resolved() {
        let palette = Palette::from_literals(["#75715E"]);
        let entry = Node::Dict(vec![k("name"), s("#75715E"), k("scope"), s("x")]);

        let rules = extract_rules(&[&entry], &palette).unwrap();
        assert_eq!(rules[0].get("name"), Some("#75715E"));
    }

    #[test]
    fn test_top_level_keys_are_not_normalized() {
        let entry = Node::Dict(vec![k("camelName"), s("v")]);
        let rules = extract_rules(&[&entry], &Palette::default()).unwrap();
        assert_eq!(rules[0].get("camelName"), Some("v"));
    }

    #[test]
    fn test_alpha_setting_resolves_to_reference() {
        let palette = Palette::from_literals(["#F92672", "#F9267280"]);
        let entry = Node::Dict(vec![
            k("scope"),
            s("invalid"),
            k("settings"),
            Node::Dict(vec![k("background"), s("#F9267280")]),
        ]);

        let rules = extract_rules(&[&entry], &palette).unwrap();
        assert_eq!(rules[0].get("background"), Some("var(color01)"));
    }

    #[test]
    fn test_order_is_preserved() {
        let first = Node::Dict(vec![k("name"), s("A")]);
        let second = Node::Dict(vec![k("name"), s("B")]);

        let rules = extract_rules(&[&first, &second], &Palette::default()).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.get("name")).collect();
        assert_eq!(names, vec![Some("A"), Some("B")]);
    }

    #[test]
    fn test_bare_settings_entry_becomes_empty_rule() {
        let lonely = Node::Dict(vec![k("settings")]);
        let rules = extract_rules(&[&lonely], &Palette::default()).unwrap();
        assert_eq!(rules, vec![FlatRecord::new()]);
    }

    #[test]
    fn test_rule_without_keys_is_an_error() {
        let keyless = Node::Dict(vec![s("orphan")]);
        let err = extract_rules(&[&keyless], &Palette::default()).unwrap_err();
        assert_eq!(err, ConvertError::RuleWithoutKeys { index: 0 });
    }

    #[test]
    fn test_values_left_without_keys_is_an_error() {
        let entry = Node::Dict(vec![s("orphan"), k("settings"), Node::Dict(vec![])]);
        let err = extract_rules(&[&entry], &Palette::default()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingKeys { .. }));
    }
}
