//! People repository

use sqlx::AnyPool;

use super::DbError;
use crate::models::{Person, PersonFields};

/// People repository
pub struct PeopleRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> PeopleRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// All characters, oldest first.
    pub async fn list(&self) -> Result<Vec<Person>, DbError> {
        let people = sqlx::query_as(
            r#"
            SELECT id, name, height, mass, eye_color, skin_color, hair_color, birth_year, gender
            FROM people
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(people)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Person>, DbError> {
        let person = sqlx::query_as(
            r#"
            SELECT id, name, height, mass, eye_color, skin_color, hair_color, birth_year, gender
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(person)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Person>, DbError> {
        let person = sqlx::query_as(
            r#"
            SELECT id, name, height, mass, eye_color, skin_color, hair_color, birth_year, gender
            FROM people
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(person)
    }

    /// Insert a character.
    ///
    /// A duplicate name returns `DbError::Conflict`; the existing row is
    /// left untouched.
    pub async fn create(&self, fields: PersonFields) -> Result<Person, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO people (name, height, mass, eye_color, skin_color, hair_color, birth_year, gender)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, height, mass, eye_color, skin_color, hair_color, birth_year, gender
            "#,
        )
        .bind(fields.name)
        .bind(fields.height)
        .bind(fields.mass)
        .bind(fields.eye_color)
        .bind(fields.skin_color)
        .bind(fields.hair_color)
        .bind(fields.birth_year)
        .bind(fields.gender)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write("character"))
    }

    /// Overwrite every column of a character. `None` if the id is unknown.
    pub async fn update(&self, id: i64, fields: PersonFields) -> Result<Option<Person>, DbError> {
        sqlx::query_as(
            r#"
            UPDATE people
            SET name = $1, height = $2, mass = $3, eye_color = $4, skin_color = $5,
                hair_color = $6, birth_year = $7, gender = $8
            WHERE id = $9
            RETURNING id, name, height, mass, eye_color, skin_color, hair_color, birth_year, gender
            "#,
        )
        .bind(fields.name)
        .bind(fields.height)
        .bind(fields.mass)
        .bind(fields.eye_color)
        .bind(fields.skin_color)
        .bind(fields.hair_color)
        .bind(fields.birth_year)
        .bind(fields.gender)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::on_write("character"))
    }

    /// Delete a character. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
