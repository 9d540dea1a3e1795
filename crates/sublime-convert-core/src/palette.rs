//! The deduplicated color palette.
//!
//! Every `#` color in the theme's color-definition section gets one
//! `colorNN` variable, numbered in first-seen order. Alpha colors
//! (`#RRGGBBAA`) are then rewritten as derived definitions:
//!
//! ```text
//! #FF0000      -> color00: "#FF0000"
//! #00FF00      -> color01: "#00FF00"
//! #FF0000AA    -> color02: "color(var(color00) alpha(0.67))"
//! #0000FF80    -> color03: "color(#0000FF alpha(0.50))"
//! ```
//!
//! The base is a `var(..)` reference when some palette entry holds exactly
//! the `#RRGGBB` prefix, and the literal prefix otherwise. Each rewritten
//! literal is recorded in a reference table so records can still find it by
//! its original spelling. The table is kept beside the variables, never
//! inside them, so it cannot leak into the emitted document.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::color::{format_alpha, ColorLiteral};
use crate::record::FlatRecord;
use crate::tree::ThemeTree;

/// Palette variables plus the alpha reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: IndexMap<String, String>,
    references: IndexMap<String, String>,
}

/// The variable id for the palette entry at `index`.
pub fn palette_id(index: usize) -> String {
    format!("color{index:02}")
}

impl Palette {
    /// Builds the palette from a theme's color-definition section.
    ///
    /// An empty or missing section yields an empty palette.
    pub fn build(tree: &ThemeTree<'_>) -> Self {
        Self::from_literals(tree.color_literals())
    }

    /// Builds the palette from color literals in document order.
    pub fn from_literals<'s>(literals: impl IntoIterator<Item = &'s str>) -> Self {
        let mut unique: Vec<ColorLiteral> = Vec::new();
        for literal in literals {
            let color = ColorLiteral::parse(literal);
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        let mut entries: IndexMap<String, String> = unique
            .iter()
            .enumerate()
            .map(|(index, color)| (palette_id(index), color.as_str().to_string()))
            .collect();

        let mut references = IndexMap::new();
        for (index, color) in unique.iter().enumerate() {
            let ColorLiteral::Alpha {
                literal,
                base,
                alpha,
            } = color
            else {
                continue;
            };

            let id = palette_id(index);
            // Full scan: any entry, wherever it sits, may serve as the base.
            let target = entries
                .iter()
                .find(|(_, definition)| *definition == base)
                .map(|(base_id, _)| format!("var({base_id})"))
                .unwrap_or_else(|| base.clone());
            let definition = format!("color({target} alpha({}))", format_alpha(*alpha));

            trace!(%literal, %id, %definition, "factored alpha color");
            entries.insert(id.clone(), definition);
            references.insert(literal.clone(), id);
        }

        debug!(
            colors = entries.len(),
            alpha_colors = references.len(),
            "built palette"
        );
        Self {
            entries,
            references,
        }
    }

    /// Number of palette variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The definition stored for a variable id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// The variable id an alpha literal was factored into.
    pub fn reference(&self, literal: &str) -> Option<&str> {
        self.references.get(literal).map(String::as_str)
    }

    /// The first variable whose definition is exactly `literal`.
    pub fn id_of(&self, literal: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, definition)| definition.as_str() == literal)
            .map(|(id, _)| id.as_str())
    }

    /// Resolves a record value against the palette.
    ///
    /// The reference table is consulted first, then the variables, both with
    /// the value exactly as given. A hit becomes `var(<id>)`; a miss is not an
    /// error and yields the trimmed value.
    pub fn resolve(&self, value: &str) -> String {
        match self.reference(value).or_else(|| self.id_of(value)) {
            Some(id) => format!("var({id})"),
            None => value.trim().to_string(),
        }
    }

    /// The variables as an emittable record, without the reference table.
    pub fn variables(&self) -> FlatRecord {
        self.entries
            .iter()
            .map(|(id, definition)| (id.as_str(), definition.as_str()))
            .collect()
    }

    /// Consumes the palette, dropping the reference table.
    pub fn into_variables(self) -> FlatRecord {
        self.entries.into_iter().collect()
    }
}
