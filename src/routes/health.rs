use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

pub async fn home() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "service": "Clans API",
            "endpoints": {
                "create_clan": "POST /clans",
                "import_clans": "POST /clans/import",
                "list_clans": "GET /clans",
                "get_clan": "GET /clans/{id}",
                "delete_clan": "DELETE /clans/{id}"
            }
        })),
    )
}
