// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - audit: crawl a site once and print the report
// - serve: run the HTTP API (POST /api/audit)
// =============================================================================

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "copy-auditor",
    version,
    about = "Audit the written copy of a website for long sentences, passive voice and more",
    long_about = "copy-auditor fetches a homepage and a few of its subpages, pulls out the real body copy \
                  (skipping navigation, footers and other boilerplate) and reports sentences that need editing."
)]
pub struct Cli {
    /// How much diagnostic output to print on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit one website and print the results
    ///
    /// Example: copy-auditor audit example.com
    Audit {
        /// Website to audit; https:// is added when no scheme is given
        website_url: String,

        /// Print the JSON response envelope instead of a table
        #[arg(long)]
        json: bool,

        /// Also run the jargon and spelling-inconsistency rules
        #[arg(long)]
        extended_rules: bool,

        /// Timeout for each subpage fetch, in seconds
        #[arg(long, default_value_t = 5)]
        subpage_timeout: u64,

        /// Timeout for each common-path existence probe, in seconds
        #[arg(long, default_value_t = 2)]
        probe_timeout: u64,

        /// Optional timeout for the homepage fetch, in seconds
        #[arg(long)]
        homepage_timeout: Option<u64>,

        /// Override the User-Agent header
        #[arg(long)]
        user_agent: Option<String>,
    },

    /// Serve the audit API over HTTP
    ///
    /// Example: copy-auditor serve --port 8080
    Serve {
        /// Port to listen on (falls back to $PORT, then 3000)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
