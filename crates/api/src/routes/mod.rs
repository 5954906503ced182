//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod status;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(health::routes())
        .merge(upload::routes())
}
