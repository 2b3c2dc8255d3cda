/// Porter Server - login front end for a remote user store
use clap::{Parser, Subcommand};
use porter_server::{config::ServerConfig, create_router, state::AppState};
use porter_store_client::CredentialStoreClient;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "porter-server")]
#[command(about = "Login server backed by a remote user store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "PORTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Check whether a username exists in the store
    CheckUser {
        /// Username to look up
        username: String,
        /// Configuration file path
        #[arg(short, long, env = "PORTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print a bcrypt hash suitable for the store's password column
    HashPassword {
        /// Password to hash
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "porter_server=info,porter_auth=info,porter_store_client=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::CheckUser { username, config } => {
            check_user(&username, config).await?;
        }
        Commands::HashPassword { password } => {
            println!("{}", porter_auth::hash_password(&password)?);
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;

    tracing::info!("Starting Porter Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("User store: {}", config.store.base_url);

    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        scheme = ?config.auth.password_scheme,
        require_active = config.auth.require_active,
        "Authentication check initialized"
    );

    let app = create_router(app_state);

    let addr = config.bind_address()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn check_user(username: &str, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    if config.store.base_url.trim().is_empty() {
        anyhow::bail!("Store URL is required (set PORTER_STORE__BASE_URL)");
    }

    let client = CredentialStoreClient::new(config.store_config())?;

    if client.user_exists(username).await? {
        println!("User '{}' exists", username);
    } else {
        println!("User '{}' does not exist", username);
    }

    Ok(())
}
