//! Employee API Module
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /api/employees | create |
//! | GET | /api/employees | list |
//! | GET | /api/employees/{id} | get_by_id |
//! | PUT | /api/employees/{id} | update |
//! | DELETE | /api/employees/{id} | delete |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
