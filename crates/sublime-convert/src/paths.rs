//! Input checks and output file naming.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension expected on input files, compared case-insensitively.
pub const INPUT_EXTENSION: &str = ".tmtheme";

/// Extension given to output files.
pub const OUTPUT_EXTENSION: &str = ".sublime-color-scheme";

/// Checks that `input` names a `.tmTheme` file.
///
/// The error reports whatever follows the last `.` in the path.
pub fn check_input(input: &Path) -> Result<()> {
    let name = input.to_string_lossy();
    if name.to_lowercase().ends_with(INPUT_EXTENSION) {
        return Ok(());
    }
    let extension = name.rsplit('.').next().unwrap_or_default().to_string();
    Err(Error::NotATheme { extension })
}

/// Decides where the converted theme is written.
///
/// An explicit output gets the `.sublime-color-scheme` suffix appended unless
/// it already ends with it. Without one, the input's extension is replaced.
pub fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(output) => {
            let name = output.to_string_lossy();
            if name.to_lowercase().ends_with(OUTPUT_EXTENSION) {
                output.to_path_buf()
            } else {
                PathBuf::from(format!("{name}{OUTPUT_EXTENSION}"))
            }
        }
        None => input.with_extension(&OUTPUT_EXTENSION[1..]),
    }
}
