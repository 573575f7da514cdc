/// Play Catalog Server - item CRUD over HTTP
use catalog_core::{CreateItem, ItemRepository};
use catalog_server::{api, config::ServerConfig, state::AppState};
use catalog_storage::SqliteItemRepository;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Play Catalog item service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Insert the sample catalogue
    Seed,
    /// List all items
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load()?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Seed => seed(config).await?,
        Commands::List => list_items(config).await?,
    }

    Ok(())
}

async fn open_repository(config: &ServerConfig) -> anyhow::Result<SqliteItemRepository> {
    let pool =
        catalog_storage::connect(&config.storage.database_url, config.storage.max_connections)
            .await?;
    tracing::info!(
        "Database connected ({} collection)",
        config.storage.collection
    );
    Ok(SqliteItemRepository::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Play Catalog server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // One repository for the whole process, shared by every request
    let items: Arc<dyn ItemRepository> = Arc::new(open_repository(&config).await?);
    let app = api::create_router(AppState::new(items));

    let addr = config.bind_address()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Sample catalogue shipped with the service
fn sample_items() -> Vec<CreateItem> {
    vec![
        CreateItem::new("Nike", "Pure White", Decimal::from(98)),
        CreateItem::new("Lascorte", "Dark colour with shining stones ", Decimal::from(110)),
        CreateItem::new("Verrari", "Badest colour", Decimal::from(50)),
    ]
}

async fn seed(config: ServerConfig) -> anyhow::Result<()> {
    let repo = open_repository(&config).await?;

    for sample in sample_items() {
        let item = repo.create(sample).await?;
        tracing::info!("Seeded {} ({})", item.name, item.id);
    }

    Ok(())
}

async fn list_items(config: ServerConfig) -> anyhow::Result<()> {
    let repo = open_repository(&config).await?;
    let items = repo.get_all().await?;

    println!("Items:");
    for item in items {
        println!(
            "  {} - {} ({}) {}",
            item.id, item.name, item.price, item.created_date
        );
    }

    Ok(())
}
