//! Terminal output rendering for the shell and CLI.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};
