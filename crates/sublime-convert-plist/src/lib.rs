//! Property-list XML reader for color-theme documents.
//!
//! `.tmTheme` files are XML property lists: nested `<dict>` and `<array>`
//! elements whose leaves are `<key>` and `<string>` elements. This crate reads
//! such a document into a closed [`Node`] tree that downstream code can match
//! exhaustively, without imposing any schema on the shape of the tree.
//!
//! # Example
//!
//! ```rust
//! use sublime_convert_plist::{parse, Node};
//!
//! let root = parse(r#"<plist version="1.0">
//!   <dict>
//!     <key>name</key>
//!     <string>Monokai</string>
//!   </dict>
//! </plist>"#).unwrap();
//!
//! let dict = &root.children()[0];
//! assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["name"]);
//! assert_eq!(dict.strings().collect::<Vec<_>>(), vec![Some("Monokai")]);
//! assert!(matches!(root, Node::Other { .. }));
//! ```
//!
//! # Text handling
//!
//! Text inside `<key>` and `<string>` is kept exactly as written (entities
//! unescaped, whitespace preserved). An empty `<string/>` is represented as
//! `Node::Str(None)`, distinct from `Node::Str(Some(""))` which cannot occur
//! from parsing but may be built by hand.

mod error;
mod node;
mod parser;

pub use error::{PlistError, Result};
pub use node::Node;
pub use parser::parse;
