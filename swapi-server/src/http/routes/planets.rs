//! Planet endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::instrument;

use super::{Message, Route};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{Planet, PlanetFields};

const NOT_FOUND: &str = "That planet not exist :(";
const EDIT_NOT_FOUND: &str = "that Planet not exits";
const DELETE_NOT_FOUND: &str = "that planet not exist :(";
const ALREADY_EXISTS: &str = "this planet already exist";
const DELETED: &str = "planet deleted!!";

/// GET /planets
async fn list_planets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = state.db.planets().list().await?;
    Ok(Json(planets))
}

/// GET /planets/{id}
async fn get_planet(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Planet>, ApiError> {
    state
        .db
        .planets()
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// POST /planets/create
#[instrument(skip(state, body), fields(planet_name = ?body.planet_name))]
async fn create_planet(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<PlanetFields>,
) -> Result<Json<Planet>, ApiError> {
    let planets = state.db.planets();
    if let Some(name) = body.planet_name.as_deref() {
        if planets.find_by_name(name).await?.is_some() {
            return Err(ApiError::Conflict(ALREADY_EXISTS));
        }
    }
    let planet = planets
        .create(body)
        .await
        .map_err(ApiError::conflict_as(ALREADY_EXISTS))?;

    tracing::info!(id = planet.id, "planet created");
    Ok(Json(planet))
}

/// PUT /planets/edit/{id}
#[instrument(skip(state, body))]
async fn edit_planet(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<PlanetFields>,
) -> Result<Json<Planet>, ApiError> {
    state
        .db
        .planets()
        .update(id, body)
        .await
        .map_err(ApiError::conflict_as(ALREADY_EXISTS))?
        .map(Json)
        .ok_or(ApiError::NotFound(EDIT_NOT_FOUND))
}

/// DELETE /planets/delete/{id} - unknown id still answers 200
#[instrument(skip(state))]
async fn delete_planet(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Message>, ApiError> {
    let msg = if state.db.planets().delete(id).await? {
        DELETED
    } else {
        DELETE_NOT_FOUND
    };
    Ok(Json(msg.into()))
}

/// Planet routes
pub fn routes() -> Vec<Route<Arc<AppState>>> {
    vec![
        Route::get("/planets", list_planets),
        Route::get("/planets/{id}", get_planet),
        Route::post("/planets/create", create_planet),
        Route::put("/planets/edit/{id}", edit_planet),
        Route::delete("/planets/delete/{id}", delete_planet),
    ]
}
