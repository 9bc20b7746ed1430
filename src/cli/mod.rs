//! Command-line interface module.

mod args;
pub mod batch;
pub mod check;
pub mod render;

pub use args::{Cli, Commands, OutputFormat};
