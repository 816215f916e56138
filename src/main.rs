use std::sync::Arc;

use indiesight_api::{
    api::{create_router, AppState},
    config::Config,
    store::{load_descriptions, CsvCatalogStore, CsvOwnershipStore, InMemoryOwnershipStore, OwnershipStore},
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("indiesight_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Malformed catalogs fail here, before anything is served
    let catalog = CsvCatalogStore::load(&config.catalog_path, config.category_schema().as_ref())?;
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog_path, "Catalog has no games; recommendations will fail");
    }

    let ownership: Arc<dyn OwnershipStore> = if config.ownership_path.is_empty() {
        tracing::info!("No ownership file configured, keeping records in memory");
        Arc::new(InMemoryOwnershipStore::new())
    } else {
        Arc::new(CsvOwnershipStore::open(&config.ownership_path)?)
    };

    let descriptions = load_descriptions(&config.descriptions_path)?;

    let state = AppState::new(catalog, ownership)
        .with_descriptions(descriptions)
        .with_page_size(config.page_size);

    let app = create_router(state).layer(CorsLayer::permissive());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "IndieSight API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
