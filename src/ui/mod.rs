//! User Interface module for the Markdown reader application.
//!
//! Contains the interactive pager, the raw-mode terminal guard, and the
//! file-backed logging setup.
mod guard;
mod pager;

pub mod logging;

pub use guard::{TerminalGuard, init_panic_hook};
pub use pager::Pager;
