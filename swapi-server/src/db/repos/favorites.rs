//! Favorites repository
//!
//! Both link tables live here. List queries join the referenced rows so a
//! user's favorites resolve in one query per table.

use sqlx::AnyPool;

use super::DbError;
use crate::models::{FavoritePeople, FavoritePeopleEntry, FavoritePlanet, FavoritePlanetEntry};

/// Favorites repository
pub struct FavoriteRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// Favorite planets of a user with names resolved, in insertion order.
    pub async fn planets_for_user(&self, user_id: i64) -> Result<Vec<FavoritePlanetEntry>, DbError> {
        let entries = sqlx::query_as(
            r#"
            SELECT f.user_id, u.user_name, f.planet_fav_id, p.planet_name
            FROM favorite_planets f
            JOIN users u ON u.id = f.user_id
            JOIN planets p ON p.id = f.planet_fav_id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Favorite characters of a user with names resolved, in insertion order.
    pub async fn people_for_user(&self, user_id: i64) -> Result<Vec<FavoritePeopleEntry>, DbError> {
        let entries = sqlx::query_as(
            r#"
            SELECT f.user_id, u.user_name, f.char_fav_id, p.name AS char_name
            FROM favorite_people f
            JOIN users u ON u.id = f.user_id
            JOIN people p ON p.id = f.char_fav_id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn find_planet(
        &self,
        user_id: i64,
        planet_id: i64,
    ) -> Result<Option<FavoritePlanet>, DbError> {
        let link = sqlx::query_as(
            r#"
            SELECT id, user_id, planet_fav_id
            FROM favorite_planets
            WHERE user_id = $1 AND planet_fav_id = $2
            "#,
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(link)
    }

    /// Link a planet to a user. An existing pair returns `DbError::Conflict`.
    pub async fn add_planet(&self, user_id: i64, planet_id: i64) -> Result<FavoritePlanet, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO favorite_planets (user_id, planet_fav_id)
            VALUES ($1, $2)
            RETURNING id, user_id, planet_fav_id
            "#,
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write("favorite planet"))
    }

    /// Unlink a planet. Returns whether a link was removed.
    pub async fn remove_planet(&self, user_id: i64, planet_id: i64) -> Result<bool, DbError> {
        let result =
            sqlx::query("DELETE FROM favorite_planets WHERE user_id = $1 AND planet_fav_id = $2")
                .bind(user_id)
                .bind(planet_id)
                .execute(self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_person(
        &self,
        user_id: i64,
        people_id: i64,
    ) -> Result<Option<FavoritePeople>, DbError> {
        let link = sqlx::query_as(
            r#"
            SELECT id, user_id, char_fav_id
            FROM favorite_people
            WHERE user_id = $1 AND char_fav_id = $2
            "#,
        )
        .bind(user_id)
        .bind(people_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(link)
    }

    pub async fn add_person(&self, user_id: i64, people_id: i64) -> Result<FavoritePeople, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO favorite_people (user_id, char_fav_id)
            VALUES ($1, $2)
            RETURNING id, user_id, char_fav_id
            "#,
        )
        .bind(user_id)
        .bind(people_id)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write("favorite character"))
    }

    pub async fn remove_person(&self, user_id: i64, people_id: i64) -> Result<bool, DbError> {
        let result =
            sqlx::query("DELETE FROM favorite_people WHERE user_id = $1 AND char_fav_id = $2")
                .bind(user_id)
                .bind(people_id)
                .execute(self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
