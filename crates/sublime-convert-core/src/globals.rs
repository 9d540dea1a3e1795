//! Editor-wide settings.
//!
//! The first entry of a theme's rules array is usually not a rule at all: it
//! has no `name` or `scope`, just a `settings` dictionary holding colors for
//! the editor itself (background, caret, selection, ...). Those entries are
//! pulled out here so the rule extractor never sees them.

use sublime_convert_plist::Node;
use tracing::{debug, warn};

use crate::color::ColorLiteral;
use crate::error::{ConvertError, Result};
use crate::keys::normalize_key;
use crate::palette::Palette;
use crate::record::{zip_fields, FlatRecord};

/// Global settings and the rules-array entries left over for rule extraction.
#[derive(Debug)]
pub struct GlobalSplit<'a> {
    pub globals: FlatRecord,
    pub remaining: Vec<&'a Node>,
}

/// Separates the global settings entries from the rules array.
///
/// An entry counts as global settings when its first child is the key
/// `settings` and it has no `name` or `scope` key of its own. Its nested
/// dictionary is zipped with color resolution and merged into the globals;
/// the entry itself is dropped from `remaining`. A settings-only entry
/// with fewer than two children is left in place.
///
/// # Errors
///
/// [`ConvertError::UnexpectedNode`] for an entry that is not a dictionary,
/// [`ConvertError::EmptyRuleEntry`] for an empty dictionary, and anything
/// the field zipper reports.
pub fn split_globals<'a>(entries: Vec<&'a Node>, palette: &Palette) -> Result<GlobalSplit<'a>> {
    let mut globals = FlatRecord::new();
    let mut remaining = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let Node::Dict(children) = entry else {
            return Err(ConvertError::UnexpectedNode {
                index,
                found: entry.tag().to_string(),
            });
        };

        match children.first() {
            None => return Err(ConvertError::EmptyRuleEntry { index }),
            Some(Node::Key(first)) if first == "settings" && !is_scoped(entry) => {
                let Some(settings) = children.get(1) else {
                    warn!(index, "settings entry has no value, keeping it as a rule");
                    remaining.push(entry);
                    continue;
                };
                let keys: Vec<String> = settings.keys().map(normalize_key).collect();
                let values: Vec<Option<&str>> = settings.strings().collect();
                globals.merge(zip_fields("global settings", &keys, &values, Some(palette))?);
            }
            Some(_) => remaining.push(entry),
        }
    }

    resolve_alpha_leftovers(&mut globals, palette);

    debug!(
        fields = globals.len(),
        rules = remaining.len(),
        "split global settings"
    );
    Ok(GlobalSplit { globals, remaining })
}

/// Whether an entry carries its own `name` or `scope`.
fn is_scoped(entry: &Node) -> bool {
    entry.keys().any(|key| key == "name" || key == "scope")
}

/// Rewrites any alpha literal still stored verbatim to its palette variable.
fn resolve_alpha_leftovers(globals: &mut FlatRecord, palette: &Palette) {
    for value in globals.values_mut() {
        if !ColorLiteral::parse(value).is_alpha() {
            continue;
        }
        if let Some(id) = palette.reference(value) {
            *value = format!("var({id})");
        }
    }
}
