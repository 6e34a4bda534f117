//! Headless terminal shell: a command registry, per-session screen and history, and the
//! portfolio's built-in commands.
//!
//! Commands reach the desktop only through [`ShellEnvironment`]: content comes from the host
//! services and windows open through the shared [`desktop_app_contract::Launcher`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod builtins;
mod completion;
mod error;
pub mod format;
pub mod parser;
mod session;

pub use error::ShellError;
pub use parser::tokenize;
pub use session::{
    handler, CommandContext, CommandDescriptor, CommandHandler, CommandHistory, CommandRegistry,
    LineKind, ShellEngine, ShellEnvironment, ShellProfile, ShellSession, TermLine, HISTORY_LIMIT,
};
