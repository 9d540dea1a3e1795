//! Rendering a converted document as `.sublime-color-scheme` text.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sublime_convert_core::Document;

use crate::error::Result;
use crate::options::ConvertOptions;

/// Comment block written ahead of the JSON body.
///
/// Sublime Text accepts comments in color-scheme files.
pub const HEADER: &str = "/*
 * This theme was auto generated!
 *
 * Parts of this theme may differ
 * from the original, and color
 * definitions using 'alpha'
 * might not convert properly.
*/
";

/// Renders `document` as pretty-printed JSON, optionally behind [`HEADER`].
///
/// Keys are written in document order. The output ends with a newline.
pub fn render(document: &Document, options: &ConvertOptions) -> Result<String> {
    let indent = vec![b' '; options.indent];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    document.serialize(&mut serializer)?;

    let body = String::from_utf8(serializer.into_inner())?;
    let mut output = String::with_capacity(HEADER.len() + body.len() + 1);
    if options.header {
        output.push_str(HEADER);
    }
    output.push_str(&body);
    output.push('\n');
    Ok(output)
}
