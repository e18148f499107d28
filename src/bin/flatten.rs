//! include-flatten CLI
//!
//! Usage:
//!   include-flatten <input> <output>                Flatten a file
//!   include-flatten <input> <output> -I dir1 -I dir2
//!                                                   Flatten with search dirs
//!   include-flatten <input> <output> --append       Keep an existing output

use anyhow::{Context, Result};
use clap::Parser;
use include_flatten::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "include-flatten")]
#[command(about = "Recursively flattens #include directives into one file")]
#[command(version)]
struct Cli {
    /// Source file to flatten
    input: PathBuf,

    /// Output file the expansion is appended to
    output: PathBuf,

    /// Directory to search for includes; repeatable, searched in order
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    include_dirs: Vec<PathBuf>,

    /// Append to an existing output file instead of replacing it
    #[arg(long)]
    append: bool,

    /// Print the search directories before running
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The expansion core only ever appends; replacing a stale artifact is
    // this entry point's job.
    if !cli.append && cli.output.exists() {
        std::fs::remove_file(&cli.output).with_context(|| {
            format!("Failed to remove stale output file: {}", cli.output.display())
        })?;
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    output::action(&format!("Flattening {}", cli.input.display()));
    if cli.verbose && !cli.include_dirs.is_empty() {
        let dirs: Vec<_> = cli
            .include_dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect();
        output::detail(&format!("searching {}", dirs.join(", ")));
    }

    if let Err(e) = include_flatten::expand(&cli.input, &cli.output, &cli.include_dirs) {
        output::error(&e.to_string());
        std::process::exit(1);
    }

    output::success(&format!("wrote {}", cli.output.display()));
    Ok(())
}
