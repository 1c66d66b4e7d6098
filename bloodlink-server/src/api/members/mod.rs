//! Member API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/members", routes())
}

fn routes() -> Router<ServerState> {
    // Optional-auth reads: me, completion and gate answer anonymous callers
    // with null/false instead of 401 (see auth::middleware)
    let read_routes = Router::new()
        .route("/me", get(handler::me))
        .route("/completion", get(handler::completion))
        .route("/recipients", get(handler::recipients))
        .route("/gate", get(handler::gate));

    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .route("/me/location", put(handler::update_location));

    read_routes.merge(manage_routes)
}
