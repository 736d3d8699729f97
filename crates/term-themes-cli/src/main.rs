mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{AppPaths, Settings};

#[derive(Parser)]
#[command(name = "term-themes")]
#[command(about = "Browse, fetch, and apply Alacritty color themes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the config directory and a default settings file
    Init,
    /// Fetch the remote theme collection into the local catalog
    Sync,
    /// List the locally available themes
    List,
    /// Back up the current Alacritty config and apply a theme
    Apply {
        /// Theme name as shown by `list`
        name: String,
        /// Also apply the configured font family and size
        #[arg(long)]
        font: bool,
    },
    /// Set the font family and size in the Alacritty config
    Font {
        /// Font family (defaults to the configured one)
        family: Option<String>,
        /// Font size (defaults to the configured one)
        size: Option<i64>,
    },
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let home = dirs::home_dir().context("could not determine home directory")?;
    let paths = AppPaths::new(&home);

    match cli.command {
        Command::Init => commands::init::run(&paths),
        Command::Sync => {
            let mut settings = Settings::load(&paths.config_file)?;
            commands::sync::run(&paths, &mut settings, github_token()).await
        }
        Command::List => {
            let mut settings = Settings::load(&paths.config_file)?;
            commands::list::run(&paths, &mut settings)
        }
        Command::Apply { name, font } => {
            let settings = Settings::load(&paths.config_file)?;
            commands::apply::run(&paths, &settings, &name, font)
        }
        Command::Font { family, size } => {
            let mut settings = Settings::load(&paths.config_file)?;
            commands::font::run(&paths, &mut settings, family, size)
        }
    }
}
