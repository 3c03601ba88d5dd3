use clap::Parser;
use larder::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    dataset,
    recommender::Recommender,
    Error, Result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,larder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Recommend {
            ingredients,
            taste,
            course,
            dietary,
            max_time,
        } => {
            recommend(settings, ingredients, taste, course, dietary, max_time).await?;
        }
        Commands::Validate { path } => {
            let path = path
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| settings.dataset.path.clone());
            larder::cli::commands::validate_dataset(&path)?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Larder server");
    info!("Dataset: {:?}", settings.dataset.path);
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    // Load the corpus once; it is read-only for the process lifetime
    let corpus = dataset::load_recipes(&settings.dataset.path)?;

    // Fit the term-weight model over the full corpus
    let recommender = Arc::new(Recommender::new(corpus, settings.recommender.clone()));
    info!(
        "Recommender ready: {} recipes, {} vocabulary terms",
        recommender.corpus_len(),
        recommender.vocabulary_len()
    );

    // Create application state
    let state = AppState {
        recommender,
        settings: settings.clone(),
    };

    // Create router with rate limiting
    let app = routes::create_router(state, &settings);

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Larder Server");
    println!("========================================");
    println!("Status: Running");
    println!("Address: http://{addr}");
    println!("Corpus: Loaded");
    println!("Term-Weight Index: Fitted");
    println!("\nAPI Endpoints:");
    println!("  POST /api/recommend");
    println!("  GET  /api/stats");
    println!("  GET  /health");
    println!("  GET  /ready");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn recommend(
    settings: Settings,
    ingredients: String,
    taste: Option<String>,
    course: Option<String>,
    dietary: Option<String>,
    max_time: Option<String>,
) -> Result<()> {
    let server_url = settings
        .server
        .external_url
        .unwrap_or_else(|| format!("http://{}:{}", settings.server.host, settings.server.port));

    larder::cli::commands::recommend(&server_url, &ingredients, taste, course, dietary, max_time)
        .await
}
