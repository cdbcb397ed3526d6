// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code:
//    0 = copy is clean, 1 = issues found, 2 = error,
//    3 = not enough server-rendered content to audit
// =============================================================================

mod cli;    // src/cli.rs - command-line parsing
mod output; // src/output.rs - table / JSON printing

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use copy_auditor::{audit_site, logging, server, AuditConfig, AuditResponse};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.into());

    match cli.command {
        Commands::Audit {
            website_url,
            json,
            extended_rules,
            subpage_timeout,
            probe_timeout,
            homepage_timeout,
            user_agent,
        } => {
            let mut config = AuditConfig {
                subpage_timeout: Duration::from_secs(subpage_timeout),
                probe_timeout: Duration::from_secs(probe_timeout),
                homepage_timeout: homepage_timeout.map(Duration::from_secs),
                ..AuditConfig::default()
            }
            .with_extended_rules(extended_rules);
            if let Some(user_agent) = user_agent {
                config.user_agent = user_agent;
            }

            handle_audit(&website_url, json, &config).await
        }
        Commands::Serve { port } => {
            let port = port
                .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
                .unwrap_or(DEFAULT_PORT);
            server::serve(port, AuditConfig::default()).await?;
            Ok(0)
        }
    }
}

// Handles the 'audit' subcommand
async fn handle_audit(website_url: &str, json: bool, config: &AuditConfig) -> Result<i32> {
    if !json {
        println!("🔍 Auditing website copy: {}", website_url);
    }

    let result = audit_site(website_url, config).await;
    let failed = result.is_err();
    let response = AuditResponse::from_result(result);

    output::print_response(&response, json)?;

    let code = if failed {
        2
    } else if response.is_sparse() {
        3
    } else if response
        .audit
        .as_ref()
        .is_some_and(|audit| audit.summary.total_violations > 0)
    {
        1
    } else {
        0
    };
    Ok(code)
}
