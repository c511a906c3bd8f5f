pub mod render;
pub mod repl;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(about = "Search TheMealDB, browse results and keep favorites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Favorites file (overrides config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Cards per page (overrides config)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the featured recipes
    Featured {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Free-text search
    Search {
        query: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Browse a category ("all" shows the featured recipes)
    Category {
        tag: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show a recipe's ingredients and instructions
    Show { id: String },

    /// Add or remove a favorite; looks the recipe up first, as opening it would
    Favorite { id: String },

    /// List favorites
    Favorites {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Interactive browsing (default)
    Browse,
}
