//! Error type for the conversion front end.

use std::string::FromUtf8Error;

use sublime_convert_core::ConvertError;
use sublime_convert_plist::PlistError;
use thiserror::Error;

/// Errors that can occur while converting a theme file.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a readable property list.
    #[error("invalid property list: {0}")]
    Plist(#[from] PlistError),

    /// The property list does not have a convertible theme shape.
    #[error("invalid theme structure: {0}")]
    Convert(#[from] ConvertError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered output was not valid UTF-8")]
    Encoding(#[from] FromUtf8Error),

    /// The input path does not name a `.tmTheme` file.
    #[error("Expected a 'tmtheme' file, was given '{extension}'")]
    NotATheme { extension: String },
}

/// Result type for conversion front-end operations.
pub type Result<T> = std::result::Result<T, Error>;
