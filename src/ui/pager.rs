//! Interactive pager for rendered display lines.
//!
//! Owns the scroll position and drives a clear / print / read-key loop
//! against the terminal. The pager knows nothing about Markdown; it
//! receives lines that are already fully styled and prints them as-is.
//!
//! The loop is single-threaded and fully synchronous. Its only
//! suspension point is the blocking keystroke read between frames.
use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use log::debug;

use crate::style::{RESET, REVERSE};

/// Pages through display lines inside a raw-mode terminal.
///
/// The viewport shows `height - 1` content rows starting at `top`; the
/// last row is reserved for a reverse-video status bar. Dimensions are
/// captured once at construction and not re-queried per frame.
pub struct Pager
{
    /// Rendered display lines being paged through
    lines: Vec<String>,
    /// Index of the first visible line
    top: usize,
    /// Terminal width in columns
    width: usize,
    /// Terminal height in rows, including the status bar row
    height: usize,
}

impl Pager
{
    /// Creates a pager over the given display lines.
    ///
    /// # Arguments
    ///
    /// * `lines` - The rendered display lines
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in rows
    ///
    /// # Returns
    ///
    /// A new `Pager` positioned at the top of the document
    #[must_use]
    pub const fn new(lines: Vec<String>, width: usize, height: usize) -> Self
    {
        Self {
            lines,
            top: 0,
            width,
            height,
        }
    }

    /// Runs the pager loop until the user quits.
    ///
    /// Each iteration redraws the full frame, then blocks on a single
    /// keystroke. The caller is expected to hold a raw-mode guard for
    /// the duration; a failed read is fatal and propagates, with the
    /// guard restoring the terminal on unwind.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing to stdout or reading input fails.
    pub fn run(&mut self) -> Result<()>
    {
        let mut stdout = io::stdout();

        debug!("paging {} lines", self.lines.len());

        loop
        {
            self.draw(&mut stdout)?;

            let event = event::read().context("Failed to read terminal input")?;

            if let CrosstermEvent::Key(key) = event
            {
                // Some platforms report repeats and releases too; only
                // presses move the viewport.
                if key.kind == KeyEventKind::Press && !self.apply_key(key.code)
                {
                    break;
                }
            }
        }

        // Leave a clean screen behind on quit.
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear screen on exit")?;

        Ok(())
    }

    /// Draws one full frame: clear, content rows, status bar.
    ///
    /// Rows past the end of the document are left blank rather than
    /// erroring.
    ///
    /// # Arguments
    ///
    /// * `out` - The output to draw the frame to
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn draw(&self, out: &mut impl Write) -> Result<()>
    {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear screen")?;

        let content_rows = self.height.saturating_sub(1);

        for row in 0..content_rows
        {
            if let Some(line) = self.lines.get(self.top.saturating_add(row))
            {
                // Raw mode needs an explicit carriage return.
                queue!(out, Print(line), Print("\r\n"))
                    .context("Failed to write display line")?;
            }
        }

        let status_row = u16::try_from(content_rows).unwrap_or(u16::MAX);
        queue!(
            out,
            MoveTo(0, status_row),
            Print(format!(
                "{REVERSE}{status:<width$}{RESET}",
                status = self.status_text(),
                width = self.width
            ))
        )
        .context("Failed to write status bar")?;

        out.flush().context("Failed to flush frame")?;

        Ok(())
    }

    /// Formats the status bar text for the current position.
    fn status_text(&self) -> String
    {
        format!(
            "Line {}/{} (q: quit, j/k: scroll, f/b: page)",
            self.top.saturating_add(1),
            self.lines.len()
        )
    }

    /// Applies one keystroke to the scroll position.
    ///
    /// Unknown keys leave the position untouched; the caller redraws
    /// regardless.
    ///
    /// # Arguments
    ///
    /// * `code` - The key that was pressed
    ///
    /// # Returns
    ///
    /// `false` when the user quit, `true` to keep paging
    fn apply_key(&mut self, code: KeyCode) -> bool
    {
        match code
        {
            KeyCode::Char('q') => return false,

            KeyCode::Char('j') | KeyCode::Down =>
            {
                if self.top < self.max_top()
                {
                    self.top = self.top.saturating_add(1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up =>
            {
                self.top = self.top.saturating_sub(1);
            }

            KeyCode::Char('f' | ' ') | KeyCode::PageDown =>
            {
                self.top = self
                    .top
                    .saturating_add(self.page_size())
                    .min(self.max_top());
            }
            KeyCode::Char('b') | KeyCode::PageUp =>
            {
                self.top = self.top.saturating_sub(self.page_size());
            }

            _ =>
            {} // Ignore other keys
        }

        true
    }

    /// Number of rows a page jump moves, one viewport of content.
    const fn page_size(&self) -> usize
    {
        self.height.saturating_sub(1)
    }

    /// Largest allowed `top`, keeping the last line reachable without
    /// ever scrolling the document fully off screen.
    const fn max_top(&self) -> usize
    {
        self.lines.len().saturating_sub(self.page_size())
    }
}
