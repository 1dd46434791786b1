//! hhc2md — flatten a Microsoft HTML Help contents file (`.hhc`) into a
//! Markdown `SUMMARY.md`.
//!
//! The `.hhc` format is HTML-shaped: nested `<UL>` lists with `<OBJECT>`
//! entries carrying `name`/`local` params. One pass over the normalized text
//! yields the entries; indentation in the output mirrors list nesting.

mod error;
mod normalize;
mod parse;
mod summary;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use memmap2::Mmap;

use crate::error::HhcError;
use crate::parse::Node;

#[derive(Parser)]
#[command(name = "hhc2md", version, about = "Convert a .hhc help contents file to SUMMARY.md")]
struct Cli {
    /// Path to the .hhc table-of-contents file
    input: Option<PathBuf>,

    /// Where to write the generated summary
    #[arg(short, long, default_value = "SUMMARY.md")]
    output: PathBuf,

    /// Print each parsed entry (depth, name, target) to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "hhc2md", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    // Bare invocation is not an error: print usage and exit cleanly
    let Some(input) = cli.input else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match run(&input, &cli.output, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hhc2md: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path, verbose: bool) -> Result<(), HhcError> {
    let nodes = parse_file(input)?;

    if nodes.is_empty() {
        println!("No nodes found");
    }
    if verbose {
        for node in &nodes {
            eprintln!("depth {:>2}  {} -> {}", node.depth, node.name, node.local);
        }
    }

    let text = format!("# Summary\n\n{}", summary::generate(&nodes));
    fs::write(output, text).map_err(|e| HhcError::Write {
        path: output.to_path_buf(),
        source: e,
    })?;

    println!("{} has been generated successfully.", output.display());
    Ok(())
}

/// Read the whole input file and run it through normalize + parse.
fn parse_file(path: &Path) -> Result<Vec<Node>, HhcError> {
    let file = fs::File::open(path).map_err(|e| HhcError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let meta = file.metadata().map_err(|e| HhcError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Empty check before mmap — mmap on 0-byte file may fail on some platforms
    if meta.len() == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| HhcError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&mmap[..]);

    Ok(parse::parse(&normalize::normalize(&content)))
}
