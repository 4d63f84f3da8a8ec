//! Customer directory and billing services entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use telecom_services::billing::{BillingState, DirectoryClient};
use telecom_services::config::Config;
use telecom_services::customer::InMemoryCustomerRepository;
use telecom_services::directory::DirectoryState;
use telecom_services::utils::shutdown_signal;
use telecom_services::{billing, directory};

/// Customer directory and billing HTTP services.
#[derive(Parser, Debug)]
#[command(name = "telecom-services")]
#[command(about = "Customer directory and billing HTTP services")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run only the Customer Directory.
    Directory {
        /// Listen port (overrides DIRECTORY_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run only the Billing Service.
    Billing {
        /// Listen port (overrides BILLING_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run both services in one process (default).
    Run,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("telecom_services=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::Directory { port }) => cmd_directory(port).await,
        Some(Command::Billing { port }) => cmd_billing(port).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run) | None => cmd_run().await,
    }
}

/// Load and validate configuration, mapping failures into anyhow.
fn load_config() -> anyhow::Result<Config> {
    let config = Config::load()?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("TELECOM SERVICES - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Directory Port: {}", config.directory_port);
    println!("  Billing Port: {}", config.billing_port);
    println!("  Customer Service URL: {}", config.customer_service_url);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run only the Customer Directory.
async fn cmd_directory(port_override: Option<u16>) -> anyhow::Result<()> {
    let mut config = load_config()?;
    if let Some(port) = port_override {
        config.directory_port = port;
    }

    let state = DirectoryState::new(Arc::new(InMemoryCustomerRepository::seeded()));
    let router = directory::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.directory_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Customer Directory listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Run only the Billing Service.
async fn cmd_billing(port_override: Option<u16>) -> anyhow::Result<()> {
    let mut config = load_config()?;
    if let Some(port) = port_override {
        config.billing_port = port;
    }

    let state = BillingState::new(DirectoryClient::new(&config));
    let router = billing::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.billing_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Billing Service listening on {}", addr);
    info!("Directory base URL: {}", config.customer_service_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Run both services in one process, each on its own listener.
async fn cmd_run() -> anyhow::Result<()> {
    let config = load_config()?;

    let directory_state = DirectoryState::new(Arc::new(InMemoryCustomerRepository::seeded()));
    let directory_router = directory::create_router(directory_state);

    let billing_state = BillingState::new(DirectoryClient::new(&config));
    let billing_router = billing::create_router(billing_state);

    let directory_addr = SocketAddr::from(([0, 0, 0, 0], config.directory_port));
    let billing_addr = SocketAddr::from(([0, 0, 0, 0], config.billing_port));

    let directory_listener = TcpListener::bind(directory_addr).await?;
    let billing_listener = TcpListener::bind(billing_addr).await?;

    info!("Customer Directory listening on {}", directory_addr);
    info!("Billing Service listening on {}", billing_addr);

    let directory_server = axum::serve(directory_listener, directory_router)
        .with_graceful_shutdown(shutdown_signal());
    let billing_server =
        axum::serve(billing_listener, billing_router).with_graceful_shutdown(shutdown_signal());

    let (directory_result, billing_result) = tokio::join!(
        async { directory_server.await },
        async { billing_server.await },
    );
    directory_result?;
    billing_result?;

    Ok(())
}
