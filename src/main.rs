use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use agent_games::config::{load_config, load_default_config, RegistryConfig};
use agent_games::engine::sanitize::{sanitize_update_for, UpdatePolicy};
use agent_games::{list_game_ids, resolve_game_type, resolve_protected_attributes};

#[derive(Parser)]
#[command(name = "agent-games", about = "Agent games registry tool")]
struct Cli {
    /// Path to agent_games.toml (default: auto-discover)
    #[arg(long, global = true, env = "AGENT_GAMES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known game identifiers
    List,
    /// Show the engine type for a game
    Resolve { game: String },
    /// Show the attributes players may not set for a game
    Protected { game: String },
    /// Sanitise a JSON state update for a game
    Sanitize {
        game: String,
        /// JSON object with the requested changes
        update: String,
        /// Override the configured update policy
        #[arg(long, value_enum)]
        policy: Option<UpdatePolicy>,
    },
}

/// Execute one command and return what should be printed on stdout.
fn run(command: Command, config: &RegistryConfig) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Command::List => list_game_ids().join("\n"),
        Command::Resolve { game } => {
            let descriptor = resolve_game_type(&game)?;
            serde_json::to_string_pretty(&descriptor.summary())?
        }
        Command::Protected { game } => {
            let attrs = resolve_protected_attributes(&game)?;
            serde_json::to_string_pretty(attrs)?
        }
        Command::Sanitize { game, update, policy } => {
            let update: serde_json::Value = serde_json::from_str(&update)?;
            let policy = policy.unwrap_or(config.updates.policy);
            let allowed = sanitize_update_for(&game, &update, policy)?;
            serde_json::to_string_pretty(&allowed)?
        }
    };
    Ok(output)
}

fn load(cli_config: Option<PathBuf>) -> Result<RegistryConfig, Box<dyn Error>> {
    let config = match cli_config {
        Some(path) => load_config(&path).map_err(|e| format!("Failed to load config: {}", e))?,
        None => load_default_config(),
    };
    config.preload_modules();
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load(cli.config).and_then(|config| run(cli.command, &config));
    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
