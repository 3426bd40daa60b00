mod assets;
mod config;
mod generate_cmd;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use drafter_core::{OpenAiClient, Pipeline};

use config::DrafterConfig;

#[derive(Parser)]
#[command(name = "drafter", about = "Natural-language to draw.io flowchart generator")]
struct Cli {
    /// API key (overrides DRAFTER_API_KEY env var and the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (overrides DRAFTER_API_BASE env var and the config file)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a drafter config file (no API call made)
    Init {
        /// API key to store in the config file
        #[arg(long)]
        key: Option<String>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Run the HTTP server with the browser editor
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
    /// Generate a flowchart plan from an instruction
    Plan {
        /// Natural-language description of the flowchart
        instruction: String,
    },
    /// Render plan text as validated draw.io XML
    Diagram {
        /// Plan file to read (defaults to stdin)
        #[arg(long)]
        plan_file: Option<PathBuf>,
    },
    /// Run both stages and write a .drawio file
    Generate {
        /// Natural-language description of the flowchart
        instruction: String,
        /// Output file path
        #[arg(long, default_value = generate_cmd::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

/// Execute the `drafter init` command: write the config file.
fn cmd_init(key: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        api: config::ApiSection {
            key: key.unwrap_or_default().to_string(),
            base_url: None,
        },
        models: config::ModelsSection::default(),
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    if key.is_none() {
        println!("Edit it to set api.key, or export DRAFTER_API_KEY instead.");
    }
    println!();
    println!("Next: run `drafter serve` and open http://127.0.0.1:3001/.");

    Ok(())
}

/// Build the pipeline from resolved configuration.
fn build_pipeline(resolved: &DrafterConfig) -> Arc<Pipeline> {
    let client = Arc::new(OpenAiClient::new(&resolved.api_base, &resolved.api_key));
    Arc::new(Pipeline::new(client, resolved.generation.clone()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { key, force } => {
            cmd_init(key.as_deref(), force)?;
        }
        Commands::Serve { bind, port } => {
            let resolved = DrafterConfig::resolve(cli.api_key.as_deref(), cli.api_base.as_deref())?;
            let pipeline = build_pipeline(&resolved);
            serve_cmd::run_serve(pipeline, &bind, port).await?;
        }
        Commands::Plan { instruction } => {
            let resolved = DrafterConfig::resolve(cli.api_key.as_deref(), cli.api_base.as_deref())?;
            let pipeline = build_pipeline(&resolved);
            generate_cmd::run_plan(&pipeline, &instruction).await?;
        }
        Commands::Diagram { plan_file } => {
            let resolved = DrafterConfig::resolve(cli.api_key.as_deref(), cli.api_base.as_deref())?;
            let pipeline = build_pipeline(&resolved);
            generate_cmd::run_diagram(&pipeline, plan_file.as_deref()).await?;
        }
        Commands::Generate {
            instruction,
            output,
        } => {
            let resolved = DrafterConfig::resolve(cli.api_key.as_deref(), cli.api_base.as_deref())?;
            let pipeline = build_pipeline(&resolved);
            generate_cmd::run_generate(&pipeline, &instruction, &output).await?;
        }
    }

    Ok(())
}
