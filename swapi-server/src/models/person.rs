//! Characters ("people")

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `people` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub eye_color: String,
    pub skin_color: String,
    pub hair_color: String,
    pub birth_year: String,
    pub gender: String,
}

/// Body of `POST /people/create` and `PUT /people/edit/{id}`.
///
/// Every column is overwritten from these fields, including the ones the
/// client left out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonFields {
    #[serde(deserialize_with = "super::text::lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub height: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub mass: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub eye_color: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub skin_color: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub hair_color: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub birth_year: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub gender: Option<String>,
}
