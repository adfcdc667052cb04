//! Operator CLI for the aggregation pipeline.
//!
//! Runs the same services as the HTTP server, without the server.
//!
//! # Usage
//!
//! ```bash
//! # Print the enriched project list as a table
//! cargo run --bin pipeline -- projects
//!
//! # Print the exact JSON the API would return
//! cargo run --bin pipeline -- projects --json
//!
//! # Capture and store fresh screenshots (no cron secret needed)
//! cargo run --bin pipeline -- capture
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`portfolio_projects::config`].

use portfolio_projects::api::dto::capture::CaptureResponse;
use portfolio_projects::api::dto::projects::ProjectsResponse;
use portfolio_projects::application::services::CaptureOutcome;
use portfolio_projects::config;
use portfolio_projects::infrastructure::cache::NullCache;
use portfolio_projects::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for running the project pipeline by hand.
#[derive(Parser)]
#[command(name = "pipeline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List enriched projects
    Projects {
        /// Print the API response body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Capture and store a fresh screenshot for every live project
    Capture,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config, Arc::new(NullCache::new()))?;

    match cli.command {
        Commands::Projects { json } => list_projects(&state, json).await?,
        Commands::Capture => capture(&state).await?,
    }

    Ok(())
}

/// Prints every enriched project, newest first.
async fn list_projects(state: &AppState, json: bool) -> Result<()> {
    let projects = state
        .project_service
        .list_projects()
        .await
        .context("Failed to list projects")?;

    if json {
        let body = ProjectsResponse::from(projects);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", "Deployed projects".bright_blue().bold());
    println!();

    for project in &projects {
        let marker = if project.featured { "*".yellow().bold() } else { " ".normal() };
        println!("{} {}", marker, project.title.bright_white().bold());
        println!("    {}", project.description.dimmed());

        if let Some(live) = &project.live_url {
            println!("    Live:   {}", live.cyan());
        } else {
            println!("    Live:   {}", "none".red());
        }
        if let Some(repo) = &project.github_url {
            println!("    Repo:   {}", repo.cyan());
        }
        if !project.tech_stack.is_empty() {
            println!("    Stack:  {}", project.tech_stack.join(", "));
        }
        if let Some(updated) = project.updated_at {
            println!("    Updated: {}", updated.format("%Y-%m-%d %H:%M UTC"));
        }
        println!();
    }

    println!("{} {}", "Total:".bright_white(), projects.len().to_string().bold());
    Ok(())
}

/// Runs the capture job and prints one line per project.
async fn capture(state: &AppState) -> Result<()> {
    println!("{}", "Capturing screenshots".bright_blue().bold());
    println!();

    let report = state
        .capture_service
        .run()
        .await
        .context("Capture job failed")?;

    for outcome in &report.results {
        match outcome {
            CaptureOutcome::Success { project, url } => {
                println!("  {} {} {}", "ok".green().bold(), project, url.dimmed());
            }
            CaptureOutcome::Skipped { project, reason } => {
                println!("  {} {} {}", "skip".yellow(), project, reason.dimmed());
            }
            CaptureOutcome::Error { project, error } => {
                println!("  {} {} {}", "fail".red().bold(), project, error.red());
            }
        }
    }

    let response = CaptureResponse::from(report);
    println!();
    println!("{}", response.message.bright_white().bold());
    Ok(())
}
