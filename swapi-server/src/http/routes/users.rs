//! User endpoints and the aggregate favorites view

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use super::Route;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{FavoritePeopleEntry, FavoritePlanetEntry, UserSummary};

const USER_NOT_FOUND: &str = "this user not exist :(";
const NO_FAVORITES: &str = "this user dont have favorites planets and characters";

/// Favorites of one user
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub planets_fav_list: Vec<FavoritePlanetEntry>,
    pub chars_fav_list: Vec<FavoritePeopleEntry>,
}

/// GET /users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state.db.users().list().await?;
    Ok(Json(users))
}

/// GET /user/{id}/favorites
///
/// A user with no favorites at all is answered with 400, not an empty 200.
async fn get_favorites(
    State(state): State<Arc<AppState>>,
    RecordId(user_id): RecordId,
) -> Result<Json<FavoritesResponse>, ApiError> {
    if state.db.users().get(user_id).await?.is_none() {
        return Err(ApiError::NotFound(USER_NOT_FOUND));
    }

    let favorites = state.db.favorites();
    let planets_fav_list = favorites.planets_for_user(user_id).await?;
    let chars_fav_list = favorites.people_for_user(user_id).await?;

    if planets_fav_list.is_empty() && chars_fav_list.is_empty() {
        return Err(ApiError::EmptyResult(NO_FAVORITES));
    }

    Ok(Json(FavoritesResponse {
        planets_fav_list,
        chars_fav_list,
    }))
}

/// User routes
pub fn routes() -> Vec<Route<Arc<AppState>>> {
    vec![
        Route::get("/users", list_users),
        Route::get("/user/{id}/favorites", get_favorites),
    ]
}
