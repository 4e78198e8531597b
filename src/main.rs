mod commands;
mod config;
mod context;
mod edgegrid;
mod generator;
mod inventory;
mod output;
mod traits;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use commands::GenerateCommand;
use context::Context;
use edgegrid::{EdgeGridClient, EdgeGridCredentials};

#[derive(Parser)]
#[command(name = "cltf")]
#[command(about = "Generate Terraform code and an import script for existing Akamai client lists", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate main.tf, import.sh and variables.tf from the remote inventory
    Generate {
        /// Path to the group assignment config file
        #[arg(short, long, default_value = "config.yaml")]
        config: String,

        /// Directory where the generated files are written
        #[arg(short, long, default_value = ".")]
        output_dir: String,

        /// Path to the EdgeGrid credentials file (defaults to ~/.edgerc)
        #[arg(long)]
        edgerc: Option<String>,

        /// Section of the credentials file to use
        #[arg(long, default_value = "default")]
        section: String,

        /// Timeout in seconds for the inventory request
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            output_dir,
            edgerc,
            section,
            timeout,
        } => {
            let ctx = Context::new();

            let edgerc_path = match edgerc {
                Some(path) => PathBuf::from(path),
                None => default_edgerc_path()?,
            };

            let credentials = EdgeGridCredentials::from_edgerc(&*ctx.fs, &edgerc_path, &section)?;
            let client = EdgeGridClient::new(credentials, Duration::from_secs(timeout))?;

            GenerateCommand::execute(&ctx, &client, Path::new(&config), Path::new(&output_dir))?;
        }
    }

    Ok(())
}

/// Well-known location of the EdgeGrid credentials file
fn default_edgerc_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Unable to determine home directory")?;
    Ok(home.join(".edgerc"))
}
