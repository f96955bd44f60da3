//! Markdown Reader Library
//!
//! A library for rendering Markdown documents as styled terminal text
//! and paging through them interactively.
//!
//! # Features
//!
//! - Line-oriented Markdown rendering to ANSI-styled display lines
//! - An interactive pager with vim-like scrolling keys
//! - Safe raw-mode terminal handling with guaranteed restoration
//!
//! # Modules
//!
//! - `render`: the pure Markdown-to-styled-lines renderer
//! - `style`: the ANSI escape sequence table
//! - `ui`: pager, terminal guard, and logging setup
pub mod render;
pub mod style;
pub mod ui;

pub use ui::logging;
