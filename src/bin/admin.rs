//! CLI administration tool for link-library.
//!
//! Manages links and the database without going through the web pages.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the link table if it is missing
//! cargo run --bin admin -- db init
//!
//! # List, add and delete links
//! cargo run --bin admin -- links list
//! cargo run --bin admin -- links add --title "Docs" --url https://example.com/docs
//! cargo run --bin admin -- links delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection

use link_library::application::services::LinkService;
use link_library::config::Config;
use link_library::infrastructure::Database;
use link_library::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for managing link-library.
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

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Add a link
    Add {
        /// Link title (prompted if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Link URL (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Link id
        id: i64,

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

    /// Create the link table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let service = LinkService::new(Arc::new(PgLinkRepository::new(database.pool())));

    let outcome = match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    database.close().await;
    outcome
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Add { title, url } => add_link(service, title, url).await,
        LinkAction::Delete { id, yes } => delete_link(service, id, yes).await,
    }
}

/// Prints every link as a table.
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<6} {:<30} {}",
            link.id.to_string().bright_black(),
            link.title.cyan(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

/// Creates a link, prompting for missing fields.
async fn add_link(service: &LinkService, title: Option<String>, url: Option<String>) -> Result<()> {
    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let link = service
        .create_link(&title, &url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add link: {}", e))?;

    println!(
        "{} {} ({})",
        "Link added with id".green().bold(),
        link.id.to_string().bright_white().bold(),
        link.url
    );

    Ok(())
}

/// Deletes a link after confirmation.
async fn delete_link(service: &LinkService, id: i64, skip_confirm: bool) -> Result<()> {
    let link = service
        .get_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Title: {}", link.title.cyan());
    println!("  URL:   {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &LinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Init => {
            service
                .ensure_schema()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link table: {}", e))?;
            println!("{}", "Link table created or already existed".green().bold());
        }
    }

    Ok(())
}
