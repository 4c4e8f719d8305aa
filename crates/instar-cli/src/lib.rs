// Rust guideline compliant 2026-02-06

//! Instar CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod args;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;
