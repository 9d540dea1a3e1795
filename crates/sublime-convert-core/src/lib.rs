//! Conversion of `.tmTheme` trees into `.sublime-color-scheme` documents.
//!
//! The input is a parsed property-list tree (see [`sublime_convert_plist`]).
//! The output is an ordered [`Document`] ready for JSON serialization. In
//! between, the conversion runs as a single pass of plain functions:
//!
//! 1. [`extract_info`] collects theme metadata, dropping the `uuid`.
//! 2. [`Palette::build`] deduplicates colors into `colorNN` variables and
//!    factors alpha channels out of `#RRGGBBAA` literals.
//! 3. [`split_globals`] pulls the editor-wide settings out of the rules array.
//! 4. [`extract_rules`] flattens every remaining entry into a rule.
//! 5. [`Document::assemble`] merges it all in output order.
//!
//! # Example
//!
//! ```rust
//! use sublime_convert_core::convert;
//! use sublime_convert_plist::parse;
//!
//! let root = parse(r#"<plist><dict>
//!   <key>name</key><string>Tiny</string>
//!   <key>settings</key>
//!   <array>
//!     <dict>
//!       <key>settings</key>
//!       <dict><key>foreground</key><string>#F8F8F2</string></dict>
//!     </dict>
//!   </array>
//! </dict></plist>"#).unwrap();
//!
//! let doc = convert(&root).unwrap();
//! assert_eq!(doc.variables().unwrap().get("color00"), Some("#F8F8F2"));
//! assert_eq!(doc.globals().unwrap().get("foreground"), Some("var(color00)"));
//! assert!(doc.rules().is_empty());
//! ```
//!
//! # Schema
//!
//! Nothing here validates that the tree is a well-formed theme. Unexpected
//! shapes either extract nothing or, where no sensible reading exists, fail
//! with a [`ConvertError`].

mod color;
mod document;
mod error;
mod globals;
mod info;
mod keys;
mod palette;
mod record;
mod rules;
mod tree;

use sublime_convert_plist::Node;
use tracing::debug;

pub use color::{format_alpha, ColorLiteral};
pub use document::{DocValue, Document};
pub use error::{ConvertError, Result};
pub use globals::{split_globals, GlobalSplit};
pub use info::extract_info;
pub use keys::normalize_key;
pub use palette::{palette_id, Palette};
pub use record::{zip_fields, FlatRecord, Rule};
pub use rules::extract_rules;
pub use tree::ThemeTree;

/// Converts a parsed theme document into a color-scheme [`Document`].
///
/// `root` is the document root as returned by
/// [`sublime_convert_plist::parse`], normally the `<plist>` element.
pub fn convert(root: &Node) -> Result<Document> {
    let tree = ThemeTree::new(root);
    if tree.is_empty() {
        debug!("theme has no top-level nodes");
    }

    let info = extract_info(&tree)?;
    let palette = Palette::build(&tree);
    let GlobalSplit { globals, remaining } = split_globals(tree.rule_entries(), &palette)?;
    let rules = extract_rules(&remaining, &palette)?;

    Ok(Document::assemble(info, palette, globals, rules))
}
