//! Planets

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `planets` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub planet_name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
}

/// Body of `POST /planets/create` and `PUT /planets/edit/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetFields {
    #[serde(deserialize_with = "super::text::lenient")]
    pub planet_name: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub rotation_period: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub orbital_period: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub diameter: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub climate: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub gravity: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub terrain: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub surface_water: Option<String>,
    #[serde(deserialize_with = "super::text::lenient")]
    pub population: Option<String>,
}
