use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    constants::ClanSort,
    dto::clan::{ClanCreated, ClansImported, ListClans, RawClan},
    error::{ClanError, ClanResult},
    models::Clan,
    state::AppState,
    usecases::validate::validate_new_clan,
};

fn json_body(body: Result<Json<Value>, JsonRejection>) -> ClanResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected clan payload");
        ClanError::InvalidBody("malformed JSON")
    })
}

pub async fn create_clan(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ClanResult<(StatusCode, Json<ClanCreated>)> {
    let raw = RawClan::from_json(json_body(body)?)?;
    let new_clan = validate_new_clan(&raw)?;

    let id = state.clans.create(new_clan).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClanCreated {
            id,
            message: "Clan created successfully",
        }),
    ))
}

pub async fn list_clans(
    State(state): State<AppState>,
    Query(params): Query<ListClans>,
) -> ClanResult<Json<Vec<Clan>>> {
    let sort = ClanSort::from_param(params.sort.as_deref());
    let clans = state.clans.list(params.region.as_deref(), sort).await?;

    Ok(Json(clans))
}

pub async fn get_clan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ClanResult<Json<Clan>> {
    let clan = state.clans.get(&id).await?;

    Ok(Json(clan))
}

pub async fn delete_clan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ClanResult<Json<Value>> {
    state.clans.delete(&id).await?;

    Ok(Json(json!({ "message": "Clan deleted successfully" })))
}

pub async fn import_clans(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ClanResult<Json<ClansImported>> {
    let Value::Array(records) = json_body(body)? else {
        return Err(ClanError::InvalidBody("expected a JSON array"));
    };

    let summary = state.clans.import(records).await?;

    Ok(Json(ClansImported {
        summary,
        message: "Clans imported",
    }))
}
