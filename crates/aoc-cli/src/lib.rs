//! Library half of the `aoc` binary: puzzle validation, the site client,
//! session storage, output writers and the subcommands built on them.

pub mod client;
pub mod commands;
pub mod error;
pub mod output;
pub mod puzzle;
pub mod session;
pub mod submission;

pub use error::{AocError, Result};
