//! CLI entry point for sublime-convert.

mod cli;

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sublime_convert::{check_input, output_path, render};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--stdout` output stays clean.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let input = &args.input;
    check_input(input)?;

    let source = fs::read_to_string(input)
        .with_context(|| format!("Unable to parse file '{}'! Is it valid?", input.display()))?;
    let root = sublime_convert_plist::parse(&source)
        .with_context(|| format!("Unable to parse file '{}'! Is it valid?", input.display()))?;
    debug!(path = %input.display(), bytes = source.len(), "parsed theme");

    let document = sublime_convert_core::convert(&root)
        .with_context(|| format!("Unable to convert '{}'", input.display()))?;
    let rendered = render(&document, &args.options())?;

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("Unable to write to stdout")?;
        return Ok(());
    }

    let output = output_path(input, args.output.as_deref());
    fs::write(&output, rendered).with_context(|| {
        format!(
            "Unable to create file '{}'! Do you have the right permissions?",
            output.display()
        )
    })?;
    info!(path = %output.display(), "wrote color scheme");

    println!(
        "Successfully converted '{}' to '{}'",
        input.display(),
        output.display()
    );
    Ok(())
}
