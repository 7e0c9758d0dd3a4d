//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tools: list the tool catalog
//! - ask: open a session and send one query
//! - health: check the agent service

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolchat - pick agent tools and chat with a hosted agent
#[derive(Parser, Debug)]
#[command(name = "toolchat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Agent service base URL (overrides config)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// User id to open sessions as (overrides config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tools the agent service offers
    Tools,

    /// Open a session with the given tools and send one query
    Ask {
        /// Tool to enable (repeatable)
        #[arg(short, long = "tool")]
        tools: Vec<String>,

        /// Query text
        query: String,
    },

    /// Check that the agent service is up
    Health,
}
