use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gepetto_client::ClientConfig;
use gepetto_core::ColorTable;
use gepetto_launcher::config::load_toml;
use gepetto_launcher::{LauncherConfig, ServerLauncher};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "gepetto")]
#[command(about = "Start the gepetto viewer and inspect client settings")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "GEPETTO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start gepetto-gui unless it is already running
    StartServer {
        /// Arguments forwarded to gepetto-gui
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the color palette
    Colors {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one palette color, by index (wraps around) or by name
    Color {
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Print the effective configuration
    Config,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct GepettoConfig {
    launcher: LauncherConfig,
    client: ClientConfig,
}

impl GepettoConfig {
    fn load(path: Option<&PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let config: Self = load_toml(path)
            .with_context(|| format!("Loading config {}", path.display()))?;
        config.launcher.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = GepettoConfig::load(cli.config.as_ref())?;

    match cli.command {
        Commands::StartServer { args } => {
            tracing::info!(executable = %config.launcher.executable, "Ensuring viewer server is running");
            ServerLauncher::new(config.launcher).ensure_server_running(&args);
        }
        Commands::Colors { json } => {
            if json {
                let entries: Vec<_> = ColorTable::iter().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (i, color) in ColorTable::iter().enumerate() {
                    let [r, g, b, a] = color.rgba;
                    println!("  {:>2}  {:<12} {:.2} {:.2} {:.2} {:.2}", i, color.name, r, g, b, a);
                }
            }
        }
        Commands::Color { key } => {
            let rgba = match key.parse::<i64>() {
                Ok(index) => ColorTable::get(index),
                Err(_) => match ColorTable::by_name(&key) {
                    Some(rgba) => rgba,
                    None => anyhow::bail!("Unknown color '{}'", key),
                },
            };
            println!("{}", serde_json::to_string(&rgba)?);
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            println!("# naming endpoint: {}", config.client.endpoint());
        }
    }

    Ok(())
}
