//! CLI administration tool for tinylink.
//!
//! Inspects and removes links, shows aggregate statistics, and checks the
//! database connection without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the newest links
//! cargo run --bin admin -- links list --page 1 --limit 20
//!
//! # Show one link
//! cargo run --bin admin -- links show abc123
//!
//! # Delete a link (asks for confirmation unless --yes)
//! cargo run --bin admin -- links delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `BASE_URL` (optional): prefix for displayed short URLs

use tinylink::config::Config;
use tinylink::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Links per page
        #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=1000))]
        limit: u32,
    },

    /// Show a single link
    Show {
        /// Short code
        code: String,
    },

    /// Permanently delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3001".into());

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo, base_url);

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List { page, limit } => list_links(service, page, limit).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Prints one page of links as a table.
///
/// # Output Format
///
/// ```text
/// Links (page 1)
///
///   Code      Clicks  Created           URL
///   ──────────────────────────────────────────────────────────────────────
///   abc123    42      2025-01-15 10:30  https://example.com/page
/// ```
async fn list_links(service: &LinkService, page: u32, limit: u32) -> Result<()> {
    println!("{}", format!("Links (page {page})").bright_blue().bold());
    println!();

    let offset = (i64::from(page) - 1) * i64::from(limit);
    let result = service
        .list_links(i64::from(limit), offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if result.links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for link in &result.links {
        println!(
            "  {:<9} {:<7} {:<17} {}",
            link.code.cyan(),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            truncate(&link.original_url, 60)
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        result.links.len().to_string().bright_white().bold(),
        result.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints every field of one link.
async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(service, &link);

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(service, &link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays aggregate statistics.
async fn handle_stats(service: &LinkService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Links:            {}",
        stats.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:           {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Clicks per link:  {}",
        format!("{:.2}", stats.avg_clicks_per_link)
            .bright_green()
            .bold()
    );
    println!(
        "  Most clicks:      {}",
        stats.max_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}

fn print_link(service: &LinkService, link: &Link) {
    let last_clicked = link
        .last_clicked_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:         {}", link.code.cyan());
    println!("  Short URL:    {}", service.short_url(&link.code).bright_cyan());
    println!("  Original URL: {}", link.original_url);
    println!(
        "  Clicks:       {}",
        link.click_count.to_string().bright_green()
    );
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
    );
    println!("  Last clicked: {}", last_clicked.bright_black());
    println!();
}

/// Shortens `s` to at most `max` characters, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }

    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["admin", "links", "list"]).unwrap();
        match cli.command {
            Commands::Links {
                action: LinkAction::List { page, limit },
            } => {
                assert_eq!(page, 1);
                assert_eq!(limit, 20);
            }
            _ => panic!("expected links list"),
        }
    }

    #[test]
    fn test_list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["admin", "links", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_delete_yes_flag() {
        let cli = Cli::try_parse_from(["admin", "links", "delete", "abc123", "-y"]).unwrap();
        match cli.command {
            Commands::Links {
                action: LinkAction::Delete { code, yes },
            } => {
                assert_eq!(code, "abc123");
                assert!(yes);
            }
            _ => panic!("expected links delete"),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }
}
