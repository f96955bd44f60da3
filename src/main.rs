use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::info;
use mdread::render::render;
use mdread::style::{RED, RESET};
use mdread::ui::{Pager, TerminalGuard, init_panic_hook};
use std::fs;
use std::process::ExitCode;

/// Fallback terminal width when the size query fails.
const DEFAULT_WIDTH: usize = 80;
/// Fallback terminal height when the size query fails.
const DEFAULT_HEIGHT: usize = 24;

fn main() -> ExitCode
{
    if let Err(report) = run()
    {
        // Mirror the renderer's palette for the one message that is
        // printed outside of it.
        eprintln!("{RED}Error: {report:#}{RESET}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Reads the document, renders it, and hands it to the pager.
///
/// # Errors
///
/// Returns an error if logging setup fails, the file cannot be read, or
/// the terminal cannot be configured for paging.
fn run() -> Result<()>
{
    mdread::logging::init_logging()?;
    init_panic_hook();

    // Parse command line arguments
    let matches = Command::new("mdread")
        .about("A terminal-based Markdown reader")
        .arg(
            Arg::new("file")
                .help("Markdown file to open")
                .value_name("FILE")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Print the rendered document to stdout instead of paging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("file")
        .context("No file provided")?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{path}'"))?;

    let (width, height) = terminal_size();
    let lines = render(&content, width);

    info!("Rendered {} display lines from {path}", lines.len());

    // Non-interactive mode: same rendered lines, printed once.
    if matches.get_flag("plain")
    {
        for line in &lines
        {
            println!("{line}");
        }
        return Ok(());
    }

    // Use RAII to ensure terminal cleanup happens on every exit path
    let _terminal_guard =
        TerminalGuard::new().context("Failed to configure the terminal")?;

    // Terminal will be restored automatically when _terminal_guard drops
    Pager::new(lines, width, height).run()
}

/// Queries the terminal dimensions, falling back to 80x24 when the
/// query fails (e.g. when stdout is not a terminal).
///
/// Captured once per invocation; the pager does not re-query on resize.
fn terminal_size() -> (usize, usize)
{
    match crossterm::terminal::size()
    {
        Ok((columns, rows)) => (usize::from(columns), usize::from(rows)),
        Err(_) => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
    }
}
