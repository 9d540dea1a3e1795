//! Error types for the plist reader.

use thiserror::Error;

/// Errors that can occur while reading a property-list document.
#[derive(Debug, Error)]
pub enum PlistError {
    /// The underlying XML reader rejected the input.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// The document ended while elements were still open.
    #[error("unclosed element <{tag}> at end of document")]
    Unclosed { tag: String },

    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag </{tag}>")]
    UnexpectedClose { tag: String },

    /// Non-whitespace text or a second element outside the root element.
    #[error("content outside the root element at byte {position}")]
    OutsideRoot { position: u64 },

    /// The document contains no elements at all.
    #[error("document has no root element")]
    Empty,
}

/// Result type for plist operations.
pub type Result<T> = std::result::Result<T, PlistError>;
