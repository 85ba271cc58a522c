use std::sync::Arc;

use anyhow::Result;
use clans::{
    config::Config,
    infrastructure::database,
    repository::MySqlClanStore,
    routes::create_routes,
    state::AppState,
    usecases::clan::ClanGateway,
};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let db_pool = database::create_pool(&config.database).await?;
    let clans = ClanGateway::new(Arc::new(MySqlClanStore::new(db_pool)));

    let state = AppState::new(clans);

    let app = create_routes().with_state(state);

    let listener = TcpListener::bind(ADDR).await?;

    tracing::info!("clans running on {ADDR}");

    axum::serve(listener, app).await?;

    Ok(())
}
