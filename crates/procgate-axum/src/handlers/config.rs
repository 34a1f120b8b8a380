//! `GET /api/config`.

use axum::Json;
use axum::extract::State;
use procgate_core::Context;

use crate::config_keys;
use crate::dto::{Config, Interface};
use crate::state::AppState;

/// Assemble the server description from configuration.
pub fn handle(ctx: &Context) -> Config {
    let config = ctx.config();

    let title = config
        .get_string(config_keys::CONFIG_TITLE)
        .or_else(|| config.get_string(config_keys::CONFIG_NAME))
        .unwrap_or_default();

    let input = config.get_string_list(config_keys::CONFIG_INTERFACE_INPUT);
    let output = config.get_string_list(config_keys::CONFIG_INTERFACE_OUTPUT);
    let interface = (input.is_some() || output.is_some()).then(|| Interface {
        input: input.unwrap_or_default(),
        output: output.unwrap_or_default(),
    });

    Config {
        title,
        version: ctx.version().to_string(),
        description: config
            .get_string(config_keys::CONFIG_DESCRIPTION)
            .unwrap_or_default(),
        copyright: config
            .get_string(config_keys::CONFIG_COPYRIGHT)
            .unwrap_or_default(),
        interface,
    }
}

pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    let ctx = state.server.request_context(None);
    Json(handle(&ctx))
}
