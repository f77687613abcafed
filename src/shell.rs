//! The interactive prompt loop and the command drivers shared with the CLI.
//!
//! All retry and re-prompt behavior lives here; the engine underneath
//! returns structured results and issues exactly once per call. Typing
//! `q`, `quit`, or `exit` at any prompt abandons the current command.

use std::io::{self, Write};
use std::path::Path;

use crate::assemble::{self, SplitOptions};
use crate::error::{Error, Result};
use crate::metadata;
use crate::output::OutputFormatter;
use crate::resolver;

const PROMPT_MARKER: &str = ">>> ";

/// Show `prompt` and read one trimmed line from stdin.
///
/// End of input (closed stdin) surfaces as [`Error::Cancelled`], so every
/// prompt site aborts cleanly instead of spinning on an empty reader.
pub fn ask_line(prompt: &str) -> Result<String> {
    let mut stdout = io::stdout();
    if !prompt.is_empty() {
        writeln!(stdout, "{prompt}")?;
    }
    write!(stdout, "{PROMPT_MARKER}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(Error::Cancelled);
    }
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; `y`, `ye`, and `yes` (any case) are affirmative,
/// anything else declines.
pub fn ask_yes_no(prompt: &str) -> Result<bool> {
    Ok(is_affirmative(&ask_line(prompt)?))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "ye" | "yes")
}

fn is_sentinel(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Run the command loop until the user quits or stdin closes.
pub fn run_shell(formatter: &OutputFormatter) -> Result<()> {
    formatter.info(&format!("{} v{}", crate::NAME, crate::VERSION));
    formatter.info("Commands: read, merge, split, help, quit");
    formatter.blank_line();

    loop {
        let command = match ask_line("") {
            Ok(command) => command,
            Err(Error::Cancelled) => break,
            Err(err) => return Err(err),
        };
        if is_sentinel(&command) {
            break;
        }

        let outcome = match command.to_ascii_lowercase().as_str() {
            "" => Ok(()),
            "help" => {
                print_help(formatter);
                Ok(())
            }
            "read" => read_loop(formatter),
            "merge" => merge_interactive(formatter),
            "split" => split_interactive(formatter),
            other => {
                formatter.warning(&format!(
                    "Unknown command: {other}. Type 'help' for the command list."
                ));
                Ok(())
            }
        };

        if let Err(err) = outcome {
            match err {
                Error::Cancelled => formatter.warning("Operation cancelled"),
                other => formatter.error(&other.to_string()),
            }
        }
    }

    Ok(())
}

fn print_help(formatter: &OutputFormatter) {
    formatter.section("Commands");
    formatter.info("  read   - show a document's metadata and page count");
    formatter.info("  merge  - concatenate documents into one file");
    formatter.info("  split  - cut a document into contiguous segments");
    formatter.info("  quit   - leave the program");
    formatter.info("Type 'q' at any prompt to abort the current command.");
}

/// `read` flow: re-prompt until a document opens or the user backs out.
fn read_loop(formatter: &OutputFormatter) -> Result<()> {
    loop {
        let name = ask_line("Which file would you like to inspect? ('q' to go back)")?;
        if name.is_empty() || is_sentinel(&name) {
            return Ok(());
        }

        let path = resolver::normalize_document_path(&name);
        match read_report(&path, false, formatter) {
            Ok(()) => return Ok(()),
            Err(err) if err.is_missing_source() => formatter.error(&err.to_string()),
            Err(err) => return Err(err),
        }
    }
}

/// Print a document's metadata, as labelled lines or as JSON.
pub fn read_report(path: &Path, json: bool, formatter: &OutputFormatter) -> Result<()> {
    let info = metadata::read_document_info(path)?;

    if json {
        let rendered = serde_json::to_string_pretty(&info)
            .map_err(|err| Error::Io {
                source: io::Error::other(err),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    formatter.section(&path.display().to_string());
    print_field(formatter, "Title", info.title.as_deref());
    print_field(formatter, "Author", info.author.as_deref());
    print_field(formatter, "Subject", info.subject.as_deref());
    print_field(formatter, "Creator", info.creator.as_deref());
    print_field(formatter, "Producer", info.producer.as_deref());
    formatter.info(&format!("  Pages:    {}", info.page_count));
    Ok(())
}

fn print_field(formatter: &OutputFormatter, label: &str, value: Option<&str>) {
    formatter.info(&format!(
        "  {:<9} {}",
        format!("{label}:"),
        value.unwrap_or("-")
    ));
}

/// `merge` flow: accumulate tokens one at a time, then hand off to
/// [`merge_tokens`].
pub fn merge_interactive(formatter: &OutputFormatter) -> Result<()> {
    let mut tokens: Vec<String> = Vec::new();

    loop {
        let token = ask_line("File or folder to add: ('q' to go back)")?;
        if is_sentinel(&token) {
            return Ok(());
        }
        if token.is_empty() {
            formatter.warning("Nothing added");
        } else {
            tokens.push(token);
            formatter.info("To merge:");
            for (index, token) in tokens.iter().enumerate() {
                formatter.list_item(index + 1, token);
            }
        }
        if !ask_yes_no("Add another? (y/n)")? {
            break;
        }
    }

    if tokens.is_empty() {
        formatter.warning("Nothing to merge");
        return Ok(());
    }

    let output = ask_line("Save the merged file as: (blank for merged.pdf)")?;
    if is_sentinel(&output) {
        return Ok(());
    }

    merge_tokens(&tokens, &output, false, formatter)
}

/// Resolve `tokens`, merge the result into `output`, and render the report.
///
/// With `assume_yes` a partial source set proceeds without prompting;
/// otherwise the user confirms before anything is written.
pub fn merge_tokens(
    tokens: &[String],
    output: &str,
    assume_yes: bool,
    formatter: &OutputFormatter,
) -> Result<()> {
    let resolution = resolver::resolve_sources(tokens);
    for issue in &resolution.issues {
        formatter.warning(&issue.to_string());
    }

    let output_path = resolver::resolve_output_path(output);
    let report = assemble::merge(&resolution.sources, &output_path, |staged| {
        for missing in &staged.missing {
            formatter.warning(&format!("Skipping: {}", missing.reason));
        }
        if assume_yes {
            return true;
        }
        ask_yes_no(&format!(
            "{} of {} sources cannot be read. Merge the rest? (y/n)",
            staged.missing.len(),
            staged.missing.len() + staged.merged.len()
        ))
        .unwrap_or(false)
    })?;

    for source in &report.sources {
        formatter.detail(
            &source.path.display().to_string(),
            &format!("{} pages", source.pages),
        );
    }
    formatter.success(&format!(
        "Wrote {} pages from {} file(s) to {}",
        report.total_pages,
        report.sources.len(),
        report.output.display()
    ));
    Ok(())
}

/// `split` flow: pick a document, collect 1-based points against its page
/// count, then hand off to [`split_document`].
pub fn split_interactive(formatter: &OutputFormatter) -> Result<()> {
    let (path, page_count) = loop {
        let name = ask_line("Which file would you like to split? ('q' to go back)")?;
        if name.is_empty() || is_sentinel(&name) {
            return Ok(());
        }

        let path = resolver::normalize_document_path(&name);
        match crate::io::reader::open_document(&path) {
            Ok(source) => break (path, source.page_count),
            Err(err) if err.is_missing_source() => formatter.error(&err.to_string()),
            Err(err) => return Err(err),
        }
    };
    formatter.info(&format!("{} has {page_count} pages", path.display()));

    let mut points: Vec<usize> = Vec::new();
    loop {
        let answer = ask_line("Split after which page?")?;
        if is_sentinel(&answer) {
            return Ok(());
        }
        match answer.parse::<usize>() {
            Ok(page) if (1..=page_count).contains(&page) => points.push(page - 1),
            Ok(page) => {
                formatter.warning(&format!("Page {page} is out of range (1-{page_count})"))
            }
            Err(_) => formatter.warning("Enter a page number"),
        }
        if !ask_yes_no("Split after another page? (y/n)")? {
            break;
        }
    }

    split_document(&path, &points, &SplitOptions::default(), formatter)
}

/// Split `path` at the given zero-based points and render the report.
pub fn split_document(
    path: &Path,
    points: &[usize],
    options: &SplitOptions,
    formatter: &OutputFormatter,
) -> Result<()> {
    let report = assemble::split(path, points, options)?;

    for &point in &report.rejected {
        formatter.warning(&format!(
            "Ignored split point after page {} (document has {} pages)",
            point + 1,
            report.page_count
        ));
    }
    for segment in &report.segments {
        formatter.info(&format!(
            "{}: pages {}-{}",
            segment.path.display(),
            segment.first_page,
            segment.last_page
        ));
    }
    formatter.success(&format!(
        "Split {} into {} file(s)",
        report.source.display(),
        report.segments.len()
    ));
    Ok(())
}
