//! Route handlers organized by resource
//!
//! Every module exposes `routes()`. The router mounts that list and the
//! sitemap at `/` lists it.

pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use axum::Router;
use serde::Serialize;

use super::server::AppState;

/// One mounted route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(method: &'static str, path: &'static str) -> Self {
        Self { method, path }
    }
}

/// Plain status message body
#[derive(Debug, Serialize)]
pub struct Message {
    pub msg: &'static str,
}

impl From<&'static str> for Message {
    fn from(msg: &'static str) -> Self {
        Self { msg }
    }
}

/// An endpoint paired with the handler that serves it
pub struct Route<S> {
    pub endpoint: Endpoint,
    handler: MethodRouter<S>,
}

impl<S> Route<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new("GET", path, routing::get(handler))
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new("POST", path, routing::post(handler))
    }

    pub fn put<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new("PUT", path, routing::put(handler))
    }

    pub fn delete<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new("DELETE", path, routing::delete(handler))
    }

    fn new(method: &'static str, path: &'static str, handler: MethodRouter<S>) -> Self {
        Self {
            endpoint: Endpoint::new(method, path),
            handler,
        }
    }
}

/// Mount a list of routes.
fn mount<S>(routes: Vec<Route<S>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.endpoint.path, route.handler)
        })
}

fn all_routes() -> Vec<Route<Arc<AppState>>> {
    [
        sitemap::routes(),
        health::routes(),
        people::routes(),
        planets::routes(),
        users::routes(),
        favorites::routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Every endpoint the router mounts, in registration order.
pub fn endpoints() -> Vec<Endpoint> {
    all_routes().into_iter().map(|route| route.endpoint).collect()
}

/// All resource routes, without middleware or state.
pub fn router() -> Router<Arc<AppState>> {
    mount(all_routes())
}
