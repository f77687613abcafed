//! Inspect, merge, and split PDF documents.
//!
//! The crate is built around two cooperating parts:
//!
//! - the [`resolver`], which turns user-supplied tokens (file or directory
//!   paths) into an ordered list of concrete document paths, and
//! - the [`assemble`] engine, which concatenates documents page by page
//!   ([`assemble::merge`]) or partitions one document into contiguous
//!   segments at page boundaries ([`assemble::split`]).
//!
//! Everything else is a thin shell: [`metadata`] passes a document's Info
//! dictionary through, while [`cli`] and [`shell`] drive the engine from
//! command-line arguments or an interactive prompt loop.

pub mod assemble;
pub mod cli;
pub mod error;
pub mod io;
pub mod metadata;
pub mod output;
pub mod resolver;
pub mod shell;

#[cfg(test)]
pub(crate) mod testkit;

pub use error::{Error, Result};

/// Application name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
