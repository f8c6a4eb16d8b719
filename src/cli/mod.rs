mod args;

/// Command handlers.
pub mod commands;

pub use args::{Args, Command};
