//! Root sitemap listing every mounted route

use axum::Json;
use serde::Serialize;

use super::{Endpoint, Route};

#[derive(Serialize)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
}

/// GET /
async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        endpoints: super::endpoints(),
    })
}

pub fn routes<S>() -> Vec<Route<S>>
where
    S: Clone + Send + Sync + 'static,
{
    vec![Route::get("/", sitemap)]
}
