use clap::{Parser, Subcommand, Args};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{browse, list, show};
use crate::core::data::RecipeCatalog;

#[derive(Parser)]
#[command(name = "recipe-library")]
#[command(about = "Browse and search a recipe catalog in the terminal")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Write debug-level logs")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run, `browse` when none is given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

impl Commands {
    pub fn execute(self, config: Config, catalog: &RecipeCatalog) -> Result<()> {
        match self {
            Commands::Browse => {
                browse::handle_browse_command(&config, catalog)?;
            }
            Commands::List(args) => {
                list::handle_list_command(&config, catalog, &args)?;
            }
            Commands::Show(args) => {
                show::handle_show_command(&config, catalog, &args)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Open the interactive recipe browser (default)
    Browse,

    /// Print recipes matching a search
    List(ListArgs),

    /// Show one recipe in full
    Show(ShowArgs),
}

#[derive(Args, Clone, Default)]
pub struct ListArgs {
    #[arg(short, long, help = "Comma-separated keywords, all must match")]
    pub query: Option<String>,

    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub dietary: Option<String>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    #[arg(help = "Recipe name")]
    pub name: String,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Simple,
    Detailed,
    Table,
    Json,
}
