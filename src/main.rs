use anyhow::Result;
use clap::{Parser, Subcommand};

/// clarkston - Clarkston Technology Group website
#[derive(Parser)]
#[command(name = "clarkston")]
#[command(about = "Marketing site and contact form for Clarkston Technology Group", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = clarkston::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    clarkston::observability::init_observability(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => clarkston::server::serve(config, host, port).await,
    }
}
