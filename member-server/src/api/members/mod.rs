//! Member API 模块

mod handler;
pub mod merge;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/members", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .head(handler::exists)
                .put(handler::update)
                .patch(handler::patch)
                .delete(handler::delete),
        )
}
