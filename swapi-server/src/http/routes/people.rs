//! People endpoints
//!
//! Deleting an unknown id answers 200 with a message, unlike GET and PUT
//! which answer 404.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::instrument;

use super::{Message, Route};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{Person, PersonFields};

const NOT_FOUND: &str = "this character not exist :(";
const EDIT_NOT_FOUND: &str = "this char not exits";
const ALREADY_EXISTS: &str = "this character already exist";
const DELETED: &str = "character deleted!!";

/// GET /people
async fn list_people(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = state.db.people().list().await?;
    Ok(Json(people))
}

/// GET /people/{id}
async fn get_person(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Person>, ApiError> {
    state
        .db
        .people()
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// POST /people/create
#[instrument(skip(state, body), fields(name = ?body.name))]
async fn create_person(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<PersonFields>,
) -> Result<Json<Person>, ApiError> {
    let people = state.db.people();
    if let Some(name) = body.name.as_deref() {
        if people.find_by_name(name).await?.is_some() {
            return Err(ApiError::Conflict(ALREADY_EXISTS));
        }
    }
    let person = people
        .create(body)
        .await
        .map_err(ApiError::conflict_as(ALREADY_EXISTS))?;

    tracing::info!(id = person.id, "character created");
    Ok(Json(person))
}

/// PUT /people/edit/{id}
#[instrument(skip(state, body))]
async fn edit_person(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<PersonFields>,
) -> Result<Json<Person>, ApiError> {
    state
        .db
        .people()
        .update(id, body)
        .await
        .map_err(ApiError::conflict_as(ALREADY_EXISTS))?
        .map(Json)
        .ok_or(ApiError::NotFound(EDIT_NOT_FOUND))
}

/// DELETE /people/delete/{id}
#[instrument(skip(state))]
async fn delete_person(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Message>, ApiError> {
    let msg = if state.db.people().delete(id).await? {
        DELETED
    } else {
        NOT_FOUND
    };
    Ok(Json(msg.into()))
}

/// People routes
pub fn routes() -> Vec<Route<Arc<AppState>>> {
    vec![
        Route::get("/people", list_people),
        Route::get("/people/{id}", get_person),
        Route::post("/people/create", create_person),
        Route::put("/people/edit/{id}", edit_person),
        Route::delete("/people/delete/{id}", delete_person),
    ]
}
