//! Command-line argument parsing.
//!
//! Running `pdfed` without a subcommand starts the interactive shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect, merge, and split PDF documents.
#[derive(Parser, Debug)]
#[command(name = "pdfed")]
#[command(version)]
#[command(about = "Inspect, merge, and split PDF documents", long_about = None)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show per-source detail lines
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a document's metadata and page count
    Read {
        /// Document to inspect (`.pdf` is appended when missing)
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Concatenate documents into a single file
    ///
    /// Paths are merged in the order given. A directory expands to its
    /// immediate regular files. Sources that cannot be read are skipped
    /// after confirmation; without any readable source nothing is written.
    Merge {
        /// Files or directories to merge, in order
        #[arg(value_name = "PATH")]
        paths: Vec<String>,

        /// Output file (defaults to merged.pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Proceed without confirmation when some sources are missing
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Split a document into contiguous segments at page boundaries
    ///
    /// Each segment is written as {stem}{N}.pdf with N counting up from 1
    /// in page order. Out-of-range points are reported and dropped; with no
    /// points the whole document becomes one segment.
    Split {
        /// Document to split (`.pdf` is appended when missing)
        #[arg(value_name = "FILE")]
        file: String,

        /// Pages to split after, 1-based (e.g. --at 3,7)
        #[arg(
            long,
            value_name = "PAGE",
            value_delimiter = ',',
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        at: Vec<u32>,

        /// Directory the segment files are written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        into: PathBuf,

        /// Filename stem for the segment files
        #[arg(long, value_name = "NAME", default_value = "split")]
        stem: String,
    },
}
