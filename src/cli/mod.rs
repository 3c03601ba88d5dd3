// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(about = "Larder - ingredient-driven recipe recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the recommendation server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Ask a running server for recipe recommendations
    Recommend {
        /// Comma-separated list of available ingredients
        ingredients: String,

        /// Taste preference (sweet, sour, spicy)
        #[arg(long)]
        taste: Option<String>,

        /// Course preference (e.g. "Main Course", "Dessert")
        #[arg(long)]
        course: Option<String>,

        /// Dietary preference (vegetarian, non-vegetarian)
        #[arg(long)]
        dietary: Option<String>,

        /// Maximum cooking time in minutes (accepted, currently unused by filtering)
        #[arg(long)]
        max_time: Option<String>,
    },

    /// Validate a dataset file and print a summary
    Validate {
        /// Path to the dataset CSV (defaults to DATASET_PATH)
        path: Option<String>,
    },
}
