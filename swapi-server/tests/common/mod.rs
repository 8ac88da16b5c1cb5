//! Shared harness for HTTP integration tests
//!
//! Each test gets its own SQLite file in a temp dir and drives the router
//! in-process with `oneshot`.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use swapi_server::models::{NewUser, User};
use swapi_server::{build_router, AppState, Database, ServerConfig};

pub struct TestApp {
    pub router: Router,
    pub db: Database,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("swapi.db").display());
        let db = Database::connect(&url).await.expect("connect");
        db.ensure_schema().await.expect("schema");

        let router = build_router(AppState::new(db.clone()), &ServerConfig::default());
        Self {
            router,
            db,
            _dir: dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::POST, uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn add_user(&self, user_name: &str) -> User {
        self.db
            .users()
            .create(NewUser {
                user_name: user_name.to_owned(),
                email: format!("{user_name}@example.com"),
                password: "secret".to_owned(),
            })
            .await
            .expect("create user")
    }

    /// Create a character through the API and return its id.
    pub async fn add_person(&self, name: &str) -> i64 {
        let (status, body) = self.post("/people/create", Some(person(name))).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a planet through the API and return its id.
    pub async fn add_planet(&self, name: &str) -> i64 {
        let (status, body) = self.post("/planets/create", Some(planet(name))).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn person(name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "eye_color": "blue",
        "skin_color": "fair",
        "hair_color": "blond",
        "birth_year": "19BBY",
        "gender": "male"
    })
}

pub fn planet(name: &str) -> Value {
    json!({
        "planet_name": name,
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000"
    })
}
