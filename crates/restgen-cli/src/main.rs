//! restgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use restgen_core::Config;
use url::Url;

#[derive(Parser)]
#[command(name = "restgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate REST client classes from a service API description
    Generate {
        /// Path or URL to the REST API description (JSON or YAML)
        ///
        /// Example: --api rest-api.json
        /// Example: --api https://example.com/rest-api.json
        #[arg(long, conflicts_with = "server_url")]
        api: Option<String>,
        /// Server to query for its self-describing REST API
        ///
        /// The description is fetched from
        /// <server>/webservices/rest/<api-version>/meta/api
        #[arg(long)]
        server_url: Option<Url>,
        /// REST API version segment used when querying the server
        #[arg(long, default_value = "v2")]
        api_version: String,
        /// Output directory for the generated client classes
        #[arg(long)]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            api,
            server_url,
            api_version,
            output_dir,
        } => {
            let output_dir = output_dir.to_string_lossy().to_string();
            let mut config = match (api, server_url) {
                (Some(api), _) => Config::new(api.clone(), output_dir),
                (None, Some(server)) => Config::for_server(server.clone(), output_dir),
                (None, None) => {
                    anyhow::bail!("either --api or --server-url is required")
                }
            };
            config.api_version = api_version.clone();

            tracing::info!(
                "Generating clients from {} into {}",
                config
                    .api_location()
                    .unwrap_or_else(|_| "<unresolved>".to_string()),
                config.output_dir
            );

            restgen_core::generate(&config)
                .await
                .context("Client generation failed")?;

            tracing::info!("Generated clients in: {}", config.output_dir);
        }
    }
    Ok(())
}
