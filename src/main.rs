use std::io::Read;

use clap::Parser;
use niftysent::cli::commands::{Cli, Commands, OutputFormat};
use niftysent::domain::entities::snapshot::MarketSnapshot;
use niftysent::domain::values::profile::ScoringProfile;
use niftysent::SentimentEngine;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Analyze {
            json,
            file,
            profile,
            profile_file,
            format,
        } => {
            let raw = match (json, file) {
                (Some(j), _) => j,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let snapshot: MarketSnapshot = serde_json::from_str(&raw)?;

            let engine = match profile_file {
                Some(path) => {
                    let profile: ScoringProfile =
                        serde_json::from_str(&std::fs::read_to_string(path)?)?;
                    SentimentEngine::new(profile)?
                }
                None => {
                    let name = profile
                        .or_else(|| std::env::var("NIFTYSENT_PROFILE").ok())
                        .unwrap_or_else(|| "revised".into());
                    SentimentEngine::from_name(&name)?
                }
            };

            let analysis = engine.analyze(&snapshot)?;
            match format {
                OutputFormat::Markdown => {
                    use niftysent::domain::ports::renderer::ReportRenderer;
                    use niftysent::infrastructure::render::markdown::MarkdownRenderer;
                    print!("{}", MarkdownRenderer.render(&analysis));
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                }
            }
        }
        Commands::Profile { name } => {
            let profile = ScoringProfile::builtin(&name)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&MarketSnapshot::sample())?);
        }
    }
    Ok(())
}
