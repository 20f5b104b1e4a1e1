//! Auth command - test and explain GitHub authentication

use crate::cli::style::{Stylize, check};
use anstream::println;
use repograph::auth::{require_github_auth, test_github_auth};
use repograph::error::Result;
use std::env;

/// Run the auth test command
pub async fn run_auth_test() -> Result<()> {
    println!("Testing GitHub authentication...");
    let host = env::var("GH_HOST").ok();
    let config = require_github_auth().await?;
    let username = test_github_auth(&config, host.as_deref()).await?;
    println!("{} Authenticated as: {}", check(), username.accent());
    println!("{}", format!("Token source: {:?}", config.source).muted());
    if let Some(host) = host {
        println!("{}", format!("Host: {host}").muted());
    }
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Public repositories can be read without a token, but anonymous");
    println!("requests are limited to 60 per hour. With a token the limit is 5000.");
    println!();
    println!("Option 1: GitHub CLI (recommended)");
    println!("  Install: https://cli.github.com/");
    println!("  Run: {}", "gh auth login".accent());
    println!();
    println!("Option 2: Environment variable");
    println!("  Set {} or {}", "GITHUB_TOKEN".accent(), "GH_TOKEN".accent());
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set {} to your instance hostname", "GH_HOST".accent());
}

/// Wrapper for auth commands
pub async fn run_auth(test: bool) -> Result<()> {
    if test {
        run_auth_test().await
    } else {
        run_auth_setup();
        Ok(())
    }
}
