use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::{Config, cli, observability};
use folio_contact::ContactSubmission;

/// folio - Personal portfolio contact relay
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Relays portfolio contact messages to the site owner", long_about = None)]
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
    /// Send a contact message to a running server
    Send {
        /// Base URL of the folio server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_observability(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match args.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Send {
            server,
            first_name,
            last_name,
            email,
            subject,
            message,
        } => {
            cli::send::run(
                &server,
                ContactSubmission {
                    first_name,
                    last_name,
                    email,
                    subject,
                    message,
                },
            )
            .await
        }
    }
}
