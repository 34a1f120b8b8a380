//! `GET /api/processes`.

use axum::Json;
use axum::extract::State;
use procgate_core::Context;

use crate::dto::{Process, Processes};
use crate::state::AppState;

/// List registered processes in registration order.
pub fn handle(ctx: &Context) -> Processes {
    Processes {
        processes: ctx
            .processes()
            .names()
            .map(|name| Process {
                name: name.to_string(),
            })
            .collect(),
    }
}

pub async fn list(State(state): State<AppState>) -> Json<Processes> {
    let ctx = state.server.request_context(None);
    Json(handle(&ctx))
}
