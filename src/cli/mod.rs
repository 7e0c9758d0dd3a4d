//! CLI module for toolchat - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing tools,
//! one-shot queries and health checks; no subcommand launches the TUI.

pub mod commands;
pub mod output;

pub use commands::Cli;
