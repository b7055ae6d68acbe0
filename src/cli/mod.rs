//! CLI module for the user registry
//!
//! Provides subcommands:
//! - `register`: register a single user and print it
//! - `import`: register a batch of users from a JSON file

pub mod import;
pub mod register;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// User Registry - validated user registration
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a single user
    Register(register::RegisterArgs),

    /// Register users from a JSON file, in order
    Import(import::ImportArgs),
}

/// Load environment, configuration and logging shared by every command
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}
