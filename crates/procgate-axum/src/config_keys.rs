//! Configuration keys read by the HTTP command.

/// Title shown by `/api/config` (falls back to [`CONFIG_NAME`]).
pub const CONFIG_TITLE: &str = "plugins.commands.http.config.title";
pub const CONFIG_NAME: &str = "plugins.commands.http.config.name";
pub const CONFIG_DESCRIPTION: &str = "plugins.commands.http.config.description";
pub const CONFIG_COPYRIGHT: &str = "plugins.commands.http.config.copyright";
pub const CONFIG_INTERFACE_INPUT: &str = "plugins.commands.http.config.interface.input";
pub const CONFIG_INTERFACE_OUTPUT: &str = "plugins.commands.http.config.interface.output";

/// Process run by `POST /api/entrypoint`.
pub const ENTRYPOINT_PROCESS: &str = "plugins.commands.http.entrypoint.process";

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "plugins.commands.http.static_dir";

/// Explicit CORS origin list; absent means allow all.
pub const CORS_ORIGINS: &str = "plugins.commands.http.cors.origins";

/// Maximum request body size in bytes.
pub const MAX_UPLOAD_SIZE: &str = "plugins.commands.http.max_upload_size";
