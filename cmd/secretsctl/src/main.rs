use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use pkg_client::HttpClient;
use pkg_constants::api::DEFAULT_API_URL;
use pkg_constants::paths::{CLI_CONFIG_DIR, CLI_CONFIG_FILE, PANEL_LOG_FILE};
use pkg_types::config::{ClientConfigFile, load_config_file};
use pkg_types::validate::validate_draft;
use pkg_types::{Draft, SecretType};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;
mod tui;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "secretsctl", about = "List and submit secret requests")]
struct Cli {
    /// Backend base URL [default: http://localhost:8000]
    #[arg(long)]
    server: Option<String>,

    /// Bearer token sent with every call
    #[arg(long)]
    token: Option<String>,

    /// Path to YAML config file [default: ~/.config/secretsctl/config.yaml]
    #[arg(long, short)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all secret requests
    List {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Submit a new secret request, then list again
    Create {
        /// Secret name
        #[arg(long)]
        name: String,

        /// Secret type: database, api or ssh
        #[arg(long = "type", default_value = "database")]
        secret_type: SecretType,

        /// Why the secret is needed
        #[arg(long, default_value = "")]
        justification: String,

        /// Reject blank names and justifications before sending
        #[arg(long)]
        strict: bool,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Check backend health
    Health,
    /// Interactive request panel
    Panel {
        /// Where diagnostics go while the panel owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Panel { log_file } => {
            let path = log_file
                .clone()
                .unwrap_or_else(|| std::env::temp_dir().join(PANEL_LOG_FILE));
            init_file_logging(&path)?;
        }
        _ => init_logging(),
    }

    let config_path = cli.config.clone().or_else(default_config_path);
    let file_cfg: ClientConfigFile = match &config_path {
        Some(path) => load_config_file(path)?,
        None => ClientConfigFile::default(),
    };

    // Merge: CLI args > config file > defaults
    let server = cli
        .server
        .or(file_cfg.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let token = cli.token.or(file_cfg.token);

    info!("Config file: {}", config_path.as_deref().unwrap_or("(none)"));
    info!("Backend:     {}", server);

    let client = HttpClient::new(&server)?.with_token(token);

    match cli.command {
        Commands::List { output } => {
            info!("Querying secret requests from {}", client.base_url());
            let requests = client.list_requests().await?;
            output::print_requests(&requests, output)?;
        }
        Commands::Create {
            name,
            secret_type,
            justification,
            strict,
            output,
        } => {
            let draft = Draft {
                secret_name: name,
                secret_type,
                justification,
            };
            if strict {
                validate_draft(&draft)?;
            }

            client.create_request(&draft.to_body()).await?;
            eprintln!(
                "Created {} request '{}'",
                draft.secret_type.label(),
                draft.secret_name
            );

            let requests = client.list_requests().await?;
            output::print_requests(&requests, output)?;
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("Backend:  {}", client.base_url());
            println!("Status:   {}", health.status);
        }
        Commands::Panel { .. } => {
            tui::run(client).await?;
        }
    }

    Ok(())
}

fn default_config_path() -> Option<String> {
    dirs::config_dir().map(|dir| {
        dir.join(CLI_CONFIG_DIR)
            .join(CLI_CONFIG_FILE)
            .to_string_lossy()
            .into_owned()
    })
}

/// Used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The panel owns the terminal, so diagnostics go to a file.
fn init_file_logging(path: &std::path::Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
