//! Planet repository

use sqlx::AnyPool;

use super::DbError;
use crate::models::{Planet, PlanetFields};

/// Planet repository
pub struct PlanetRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> PlanetRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Planet>, DbError> {
        let planets = sqlx::query_as(
            r#"
            SELECT id, planet_name, rotation_period, orbital_period, diameter,
                   climate, gravity, terrain, surface_water, population
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(planets)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Planet>, DbError> {
        let planet = sqlx::query_as(
            r#"
            SELECT id, planet_name, rotation_period, orbital_period, diameter,
                   climate, gravity, terrain, surface_water, population
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(planet)
    }

    pub async fn find_by_name(&self, planet_name: &str) -> Result<Option<Planet>, DbError> {
        let planet = sqlx::query_as(
            r#"
            SELECT id, planet_name, rotation_period, orbital_period, diameter,
                   climate, gravity, terrain, surface_water, population
            FROM planets
            WHERE planet_name = $1
            "#,
        )
        .bind(planet_name)
        .fetch_optional(self.pool)
        .await?;

        Ok(planet)
    }

    /// Insert a planet. Duplicate `planet_name` returns `DbError::Conflict`.
    pub async fn create(&self, fields: PlanetFields) -> Result<Planet, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO planets (planet_name, rotation_period, orbital_period, diameter,
                                 climate, gravity, terrain, surface_water, population)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, planet_name, rotation_period, orbital_period, diameter,
                      climate, gravity, terrain, surface_water, population
            "#,
        )
        .bind(fields.planet_name)
        .bind(fields.rotation_period)
        .bind(fields.orbital_period)
        .bind(fields.diameter)
        .bind(fields.climate)
        .bind(fields.gravity)
        .bind(fields.terrain)
        .bind(fields.surface_water)
        .bind(fields.population)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write("planet"))
    }

    pub async fn update(&self, id: i64, fields: PlanetFields) -> Result<Option<Planet>, DbError> {
        sqlx::query_as(
            r#"
            UPDATE planets
            SET planet_name = $1, rotation_period = $2, orbital_period = $3, diameter = $4,
                climate = $5, gravity = $6, terrain = $7, surface_water = $8, population = $9
            WHERE id = $10
            RETURNING id, planet_name, rotation_period, orbital_period, diameter,
                      climate, gravity, terrain, surface_water, population
            "#,
        )
        .bind(fields.planet_name)
        .bind(fields.rotation_period)
        .bind(fields.orbital_period)
        .bind(fields.diameter)
        .bind(fields.climate)
        .bind(fields.gravity)
        .bind(fields.terrain)
        .bind(fields.surface_water)
        .bind(fields.population)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write("planet"))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
