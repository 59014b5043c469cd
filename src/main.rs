use std::sync::Arc;

use starhold::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let catalog = startup::load_catalog(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        db,
        catalog: Arc::new(catalog),
    };

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}
