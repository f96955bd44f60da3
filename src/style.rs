//! ANSI escape sequences shared by the renderer and the pager.
//!
//! A process-wide constant table, never mutated. Every display line the
//! renderer produces embeds these sequences directly, so downstream code
//! can print lines as-is without a styling layer of its own.

/// Clears all active attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold/bright attribute.
pub const BOLD: &str = "\x1b[1m";
/// Underline attribute. Also stands in for italics, which many terminals
/// lack a dedicated attribute for.
pub const UNDERLINE: &str = "\x1b[4m";
/// Red foreground, used for fatal error reporting.
pub const RED: &str = "\x1b[31m";
/// Green foreground, used for code fence rules.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground, used for level-1 headings and blockquote bars.
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground, used for link URLs.
pub const BLUE: &str = "\x1b[34m";
/// Cyan foreground, used for level-2 and deeper headings.
pub const CYAN: &str = "\x1b[36m";
/// Reverse video, used for code and the pager status bar.
pub const REVERSE: &str = "\x1b[7m";
