use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "niftysent", about = "Nifty 50 pre-market sentiment analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one pre-market snapshot
    Analyze {
        /// Snapshot JSON (reads stdin when neither this nor --file is given)
        json: Option<String>,
        /// Read the snapshot JSON from a file
        #[arg(long, conflicts_with = "json")]
        file: Option<String>,
        /// Built-in profile name (revised, classic)
        #[arg(long, conflicts_with = "profile_file")]
        profile: Option<String>,
        /// Load a custom profile from a JSON file
        #[arg(long)]
        profile_file: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },
    /// Print a built-in profile as JSON
    Profile {
        /// Profile name (revised, classic)
        #[arg(default_value = "revised")]
        name: String,
    },
    /// Print a sample snapshot JSON to start from
    Sample,
}
