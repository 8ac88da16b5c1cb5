//! Favorite planet / character link endpoints
//!
//! Adding checks that both ends exist (404), then that the pair is new
//! (400). The unique index on the pair backs the second check, so a
//! concurrent duplicate also ends in 400.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use super::{Message, Route};
use crate::http::error::ApiError;
use crate::http::extractors::LinkIds;
use crate::http::server::AppState;

const PLANET_OR_USER_MISSING: &str = "the planet or the user not esxist :(";
const PLANET_ALREADY_FAVORITE: &str = "that planet already exist";
const PLANET_LINK_MISSING: &str = "this user or this planet not exist";
const PLANET_REMOVED: &str = "planet deleted!";

const CHARACTER_OR_USER_MISSING: &str = "the character or the user not esxist :(";
const CHARACTER_ALREADY_FAVORITE: &str = "this character already exist";
const CHARACTER_LINK_MISSING: &str = "this user or this character not exist";
const CHARACTER_REMOVED: &str = "character deleted!";

/// Planet added to a user's favorites
#[derive(Debug, Serialize)]
pub struct FavoritePlanetAdded {
    pub planet_id: i64,
    pub planet_fav_name: String,
    pub user_name: String,
    pub user_id: i64,
}

/// Character added to a user's favorites
#[derive(Debug, Serialize)]
pub struct FavoritePeopleAdded {
    pub people_id: i64,
    pub people_fav_name: String,
    pub user_name: String,
    pub user_id: i64,
}

/// POST /user/{id}/favorites/planet/{planet_id}
#[instrument(skip(state, ids), fields(user_id = ids.user_id, planet_id = ids.target_id))]
async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    ids: LinkIds,
) -> Result<Json<FavoritePlanetAdded>, ApiError> {
    let user = state.db.users().get(ids.user_id).await?;
    let planet = state.db.planets().get(ids.target_id).await?;
    let (Some(user), Some(planet)) = (user, planet) else {
        return Err(ApiError::NotFound(PLANET_OR_USER_MISSING));
    };

    let favorites = state.db.favorites();
    if favorites.find_planet(user.id, planet.id).await?.is_some() {
        return Err(ApiError::Conflict(PLANET_ALREADY_FAVORITE));
    }
    favorites
        .add_planet(user.id, planet.id)
        .await
        .map_err(ApiError::conflict_as(PLANET_ALREADY_FAVORITE))?;

    Ok(Json(FavoritePlanetAdded {
        planet_id: planet.id,
        planet_fav_name: planet.planet_name,
        user_name: user.user_name,
        user_id: user.id,
    }))
}

/// DELETE /delete/favorites/user/{id}/planet/{planet_id}
#[instrument(skip(state, ids), fields(user_id = ids.user_id, planet_id = ids.target_id))]
async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    ids: LinkIds,
) -> Result<Json<Message>, ApiError> {
    if !state.db.favorites().remove_planet(ids.user_id, ids.target_id).await? {
        return Err(ApiError::NotFound(PLANET_LINK_MISSING));
    }
    Ok(Json(PLANET_REMOVED.into()))
}

/// POST /user/{id}/favorites/people/{people_id}
#[instrument(skip(state, ids), fields(user_id = ids.user_id, people_id = ids.target_id))]
async fn add_favorite_person(
    State(state): State<Arc<AppState>>,
    ids: LinkIds,
) -> Result<Json<FavoritePeopleAdded>, ApiError> {
    let user = state.db.users().get(ids.user_id).await?;
    let person = state.db.people().get(ids.target_id).await?;
    let (Some(user), Some(person)) = (user, person) else {
        return Err(ApiError::NotFound(CHARACTER_OR_USER_MISSING));
    };

    let favorites = state.db.favorites();
    if favorites.find_person(user.id, person.id).await?.is_some() {
        return Err(ApiError::Conflict(CHARACTER_ALREADY_FAVORITE));
    }
    favorites
        .add_person(user.id, person.id)
        .await
        .map_err(ApiError::conflict_as(CHARACTER_ALREADY_FAVORITE))?;

    Ok(Json(FavoritePeopleAdded {
        people_id: person.id,
        people_fav_name: person.name,
        user_name: user.user_name,
        user_id: user.id,
    }))
}

/// DELETE /delete/favorites/user/{id}/people/{people_id}
#[instrument(skip(state, ids), fields(user_id = ids.user_id, people_id = ids.target_id))]
async fn remove_favorite_person(
    State(state): State<Arc<AppState>>,
    ids: LinkIds,
) -> Result<Json<Message>, ApiError> {
    if !state.db.favorites().remove_person(ids.user_id, ids.target_id).await? {
        return Err(ApiError::NotFound(CHARACTER_LINK_MISSING));
    }
    Ok(Json(CHARACTER_REMOVED.into()))
}

/// Favorites link routes
pub fn routes() -> Vec<Route<Arc<AppState>>> {
    vec![
        Route::post(
            "/user/{id}/favorites/planet/{planet_id}",
            add_favorite_planet,
        ),
        Route::delete(
            "/delete/favorites/user/{id}/planet/{planet_id}",
            remove_favorite_planet,
        ),
        Route::post(
            "/user/{id}/favorites/people/{people_id}",
            add_favorite_person,
        ),
        Route::delete(
            "/delete/favorites/user/{id}/people/{people_id}",
            remove_favorite_person,
        ),
    ]
}
