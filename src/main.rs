//! pdfed - inspect, merge, and split PDF documents.

use std::process;

use clap::Parser;

use pdfed::assemble::SplitOptions;
use pdfed::cli::{Cli, Command};
use pdfed::error::Result;
use pdfed::output::OutputFormatter;
use pdfed::{resolver, shell};

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    if let Err(err) = run(cli, &formatter) {
        formatter.error(&err.to_string());
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    match cli.command {
        None => shell::run_shell(formatter),
        Some(Command::Read { file, json }) => {
            let path = resolver::normalize_document_path(&file);
            shell::read_report(&path, json, formatter)
        }
        Some(Command::Merge { paths, output, yes }) => {
            if paths.is_empty() {
                shell::merge_interactive(formatter)
            } else {
                shell::merge_tokens(&paths, output.as_deref().unwrap_or(""), yes, formatter)
            }
        }
        Some(Command::Split {
            file,
            at,
            into,
            stem,
        }) => {
            let path = resolver::normalize_document_path(&file);
            let points: Vec<usize> = at.into_iter().map(|page| page as usize - 1).collect();
            let options = SplitOptions {
                output_dir: into,
                stem,
            };
            shell::split_document(&path, &points, &options, formatter)
        }
    }
}
