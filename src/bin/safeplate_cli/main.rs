// ABOUTME: SafePlate CLI - allergen checks, recipe filtering and grocery planning over JSON files
// ABOUTME: Reads household, inventory and recipe documents exported by the app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate
//!
//! Usage:
//! ```bash
//! # Check one ingredient against the account holder's allergies
//! safeplate-cli check "Peanut Butter Sandwich" --profile household.json
//!
//! # Check a packaged item with declared allergens for a family member
//! safeplate-cli check "Granola Bar" --declared Milk,Soy --profile household.json --member kid-1
//!
//! # Safety verdict for every catalog recipe, with substitution ideas
//! safeplate-cli recipes --profile household.json --substitutions
//!
//! # Rank safe recipes by what is already in the kitchen
//! safeplate-cli suggest --profile household.json --inventory inventory.json
//!
//! # Shopping list for two recipes, minus inventory, as JSON
//! safeplate-cli --format json grocery --inventory inventory.json \
//!     --recipe seed-fluffy-pancakes --recipe seed-tomato-pasta
//!
//! # Items expiring in the next 5 days
//! safeplate-cli expiring --inventory inventory.json --days 5
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use safeplate::config::{AppConfig, LogLevel};
use safeplate::errors::{AppError, AppResult};
use safeplate::logging::LoggingConfig;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "safeplate-cli",
    version,
    about = "SafePlate allergen safety CLI",
    long_about = "Check ingredients and recipes against household allergies, rank recipes by inventory, and build grocery lists."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Which household document and which member to check against
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Household JSON file (`user` plus optional `family`)
    #[arg(long)]
    pub profile: PathBuf,

    /// Family member id to check against instead of the account holder
    #[arg(long)]
    pub member: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check one ingredient or packaged item
    Check {
        /// Ingredient or product name
        ingredient: String,

        /// Allergens declared on the packaging (comma-separated)
        #[arg(long, value_delimiter = ',')]
        declared: Vec<String>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Safety verdict for every recipe
    Recipes {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Recipe JSON file (defaults to the built-in catalog)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Show only recipes that are safe
        #[arg(long)]
        safe_only: bool,

        /// Suggest replacements for unsafe ingredient lines
        #[arg(long)]
        substitutions: bool,
    },

    /// Rank safe recipes by inventory coverage and preferences
    Suggest {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Inventory JSON file
        #[arg(long)]
        inventory: PathBuf,

        /// Recipe JSON file (defaults to the built-in catalog)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Shopping list for recipes minus what is in stock
    Grocery {
        /// Inventory JSON file
        #[arg(long)]
        inventory: PathBuf,

        /// Recipe JSON file (defaults to the built-in catalog)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Only plan for these recipe ids (repeatable)
        #[arg(long = "recipe")]
        recipe_ids: Vec<String>,
    },

    /// Inventory items that are expired or expiring soon
    Expiring {
        /// Inventory JSON file
        #[arg(long)]
        inventory: PathBuf,

        /// Look-ahead window in days (defaults to `SAFEPLATE_EXPIRY_WARNING_DAYS`)
        #[arg(long)]
        days: Option<u64>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if verbose {
        logging = logging.with_minimum_level(LogLevel::Debug);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = AppConfig::from_env()?;
    debug!(?config, "Loaded configuration");
    let format = cli.format;

    match cli.command {
        Command::Check {
            ingredient,
            declared,
            profile,
        } => commands::check::run(&profile, &ingredient, declared, format),
        Command::Recipes {
            profile,
            recipes,
            safe_only,
            substitutions,
        } => commands::recipes::run(
            &config,
            &profile,
            recipes.as_deref(),
            safe_only,
            substitutions,
            format,
        ),
        Command::Suggest {
            profile,
            inventory,
            recipes,
            limit,
        } => commands::recipes::suggest(
            &config,
            &profile,
            &inventory,
            recipes.as_deref(),
            limit,
            format,
        ),
        Command::Grocery {
            inventory,
            recipes,
            recipe_ids,
        } => commands::inventory::grocery(
            &config,
            &inventory,
            recipes.as_deref(),
            &recipe_ids,
            format,
        ),
        Command::Expiring {
            inventory,
            days,
            today,
        } => commands::inventory::expiring(&config, &inventory, days, today, format),
    }
}
