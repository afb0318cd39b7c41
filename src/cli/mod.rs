//! Command-line interface. With no subcommand the binary starts the TUI.

mod common;
pub mod completions;
pub mod list;

pub use common::{print_success, print_warning};
pub use list::ListKind;

use crate::config::Config;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::PathBuf;
use tracing::info;

const AFTER_HELP: &str = indoc! {"
    Without a subcommand the terminal UI starts. The NGO demo account
    signs in with 123 / 123.

    Config: ~/.config/donate-away/config.toml (or $DONATE_AWAY_CONFIG_DIR)
    Logs:   <cache dir>/donate-away/donate-away.log (filter with RUST_LOG)
"};

/// Terminal prototype of the Donate Away food-donation app
#[derive(Parser, Debug)]
#[command(
    name = "donate-away",
    version,
    about = "Terminal prototype of the Donate Away food-donation app",
    long_about = None,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Colour theme, overriding the config file (dark, light, nocolor)
    #[arg(long, global = true, value_parser = parse_theme)]
    pub theme: Option<ThemeType>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one of the sample lists shown on the NGO dashboard
    List {
        kind: ListKind,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Write the default config file if there is none
    Init,
}

fn parse_theme(value: &str) -> Result<ThemeType, String> {
    value.parse()
}

impl Cli {
    /// Config file location: `--config` or the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Runs a subcommand. Returns `Ok(false)` when there is none and the
    /// TUI should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::List { kind, json }) => {
                info!(?kind, json, "CLI: list command executed");
                list::run(*kind, *json, &mut std::io::stdout().lock())?;
            }
            Some(Commands::Completions { shell }) => completions::generate(*shell)?,
            Some(Commands::Config { command }) => self.cmd_config(*command)?,
            None => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_config(&self, command: ConfigCommand) -> Result<()> {
        let path = self.config_path();
        match command {
            ConfigCommand::Path => println!("{}", path.display()),
            ConfigCommand::Init => {
                if path.exists() {
                    print_warning(&format!("Config already exists at {}", path.display()));
                } else {
                    Config::default()
                        .save(&path)
                        .context("Failed to write default configuration")?;
                    info!(path = %path.display(), "CLI: wrote default config");
                    print_success(&format!("Wrote default config to {}", path.display()));
                }
            }
        }
        Ok(())
    }
}
