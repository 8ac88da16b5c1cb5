//! Favorites link rows and their resolved list entries

use serde::Serialize;
use sqlx::FromRow;

/// Row of the `favorite_planets` link table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FavoritePlanet {
    pub id: i64,
    pub user_id: i64,
    pub planet_fav_id: i64,
}

/// Row of the `favorite_people` link table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FavoritePeople {
    pub id: i64,
    pub user_id: i64,
    pub char_fav_id: i64,
}

/// Favorite planet with user and planet names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct FavoritePlanetEntry {
    pub user_id: i64,
    pub user_name: String,
    pub planet_fav_id: i64,
    pub planet_name: String,
}

/// Favorite character with user and character names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct FavoritePeopleEntry {
    pub user_id: i64,
    pub user_name: String,
    pub char_fav_id: i64,
    pub char_name: String,
}
