//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use sublime_convert::{ConvertOptions, DEFAULT_INDENT};

#[derive(Debug, Parser)]
#[command(name = "sublime-convert")]
#[command(version)]
#[command(about = "Convert a .tmTheme file into a .sublime-color-scheme file")]
pub struct Args {
    /// The .tmTheme file to convert.
    pub input: PathBuf,

    /// Where to write the result. `.sublime-color-scheme` is appended when
    /// missing; defaults to the input path with its extension replaced.
    pub output: Option<PathBuf>,

    /// Omit the generated-theme comment block.
    #[arg(long)]
    pub no_header: bool,

    /// Spaces per JSON indentation level.
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Print the converted theme instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        let options = ConvertOptions::new().with_indent(self.indent);
        if self.no_header {
            options.without_header()
        } else {
            options
        }
    }
}
