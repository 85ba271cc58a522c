pub mod clan;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health))
        .route("/clans", post(clan::create_clan).get(clan::list_clans))
        .route("/clans/import", post(clan::import_clans))
        .route(
            "/clans/{id}",
            get(clan::get_clan).delete(clan::delete_clan),
        )
}
