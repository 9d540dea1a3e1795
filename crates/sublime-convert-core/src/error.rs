//! Error types for the conversion core.

use thiserror::Error;

/// Structural problems found while walking a theme tree.
///
/// Conversion never validates the theme against a schema; these are the
/// shapes the extractors cannot make sense of at all. Any of them aborts the
/// whole conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Values were present but there was no key to attach them to.
    #[error("{context}: {values} value(s) but no key to hold them")]
    MissingKeys {
        context: &'static str,
        values: usize,
    },

    /// An entry of the rules array has no children.
    #[error("rules entry {index} is empty")]
    EmptyRuleEntry { index: usize },

    /// A rule dictionary has no keys at all.
    #[error("rule {index} has no keys")]
    RuleWithoutKeys { index: usize },

    /// An entry of the rules array is not a dictionary.
    #[error("rules entry {index} is a <{found}>, expected <dict>")]
    UnexpectedNode { index: usize, found: String },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
