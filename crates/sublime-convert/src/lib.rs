//! Convert `.tmTheme` color themes into `.sublime-color-scheme` files.
//!
//! This crate ties the pieces together: [`sublime_convert_plist`] reads the
//! XML property list, [`sublime_convert_core`] transforms the tree, and
//! [`render()`] writes the result as commented, pretty-printed JSON.
//!
//! # Example
//!
//! ```rust
//! use sublime_convert::{convert_str, ConvertOptions};
//!
//! let theme = r#"<plist><dict>
//!   <key>name</key><string>Tiny</string>
//!   <key>settings</key>
//!   <array>
//!     <dict>
//!       <key>settings</key>
//!       <dict><key>background</key><string>#272822</string></dict>
//!     </dict>
//!   </array>
//! </dict></plist>"#;
//!
//! let output = convert_str(theme, &ConvertOptions::new().without_header()).unwrap();
//! assert!(output.contains(r#""background": "var(color00)""#));
//! ```

pub mod error;
pub mod options;
pub mod paths;
pub mod render;

pub use error::{Error, Result};
pub use options::{ConvertOptions, DEFAULT_INDENT};
pub use paths::{check_input, output_path};
pub use render::{render, HEADER};

use sublime_convert_core::Document;

/// Parses and converts theme XML into a [`Document`].
pub fn convert_document(xml: &str) -> Result<Document> {
    let root = sublime_convert_plist::parse(xml)?;
    Ok(sublime_convert_core::convert(&root)?)
}

/// Parses, converts and renders theme XML in one step.
pub fn convert_str(xml: &str, options: &ConvertOptions) -> Result<String> {
    let document = convert_document(xml)?;
    render(&document, options)
}
