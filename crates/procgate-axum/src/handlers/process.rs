//! `POST /api/processes/{process_name}` and `POST /api/entrypoint`.
//!
//! Pipeline: existence check → form intake → execution → response. The only
//! branch is whether the client named the output it wants.

use std::path::{Path, PathBuf};

use axum::Json;
use axum::body::Body;
use axum::extract::{FromRequest, Multipart, Path as RoutePath, Query, Request, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use procgate_core::{
    Context, ExecutionOptions, Object, ObjectKind, Payload, ProcessExecutor,
};
use serde::Deserialize;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use crate::config_keys;
use crate::dto::StatusMessage;
use crate::error::HttpError;
use crate::intake::{Form, mime_essence, payload_from_form};
use crate::state::AppState;

/// Query parameters accepted by the process routes.
#[derive(Debug, Default, Deserialize)]
pub struct OutputQuery {
    pub output_name: Option<String>,
}

/// Run `name` with the submitted form and convert its output.
pub async fn handle(
    ctx: &Context,
    executor: &dyn ProcessExecutor,
    name: &str,
    form: Form,
    output_name: Option<&str>,
) -> Result<Response, HttpError> {
    if !ctx.processes().contains(name) {
        return Err(HttpError::NotFound(format!("Process {name} not found")));
    }

    let input = payload_from_form(ctx, form).await?;
    info!(process = %name, inputs = input.len(), "Executing process");

    let options = ExecutionOptions::from_context(ctx);
    let output = executor.execute(name, input, &options).await?;

    respond(ctx, &output, output_name).await
}

async fn respond(
    ctx: &Context,
    output: &Payload,
    output_name: Option<&str>,
) -> Result<Response, HttpError> {
    let selected = match output_name {
        Some(wanted) => Some(output.get(wanted).ok_or_else(|| {
            HttpError::BadRequest(format!(
                "Output {wanted} not found. Result includes the following keys: {}",
                output.keys().join(",")
            ))
        })?),
        None if output.is_empty() => None,
        None => select_output(output),
    };

    let Some(object) = selected else {
        return Ok(Json(StatusMessage::no_output()).into_response());
    };

    let path = save_output(ctx, object).await?;
    stream_file(&path).await
}

/// Pick the object to return when the client did not name one.
///
/// A single object wins outright. Otherwise structured data (dictionary or
/// array) is preferred, then documents (image or pdf), then whatever was
/// added first.
pub fn select_output(output: &Payload) -> Option<&Object> {
    if output.len() == 1 {
        return output.first();
    }
    if let Some(object) = output.get_by_kinds(&[ObjectKind::Dictionary, ObjectKind::Array]) {
        return Some(object);
    }
    if let Some(object) = output.get_by_kinds(&[ObjectKind::Image, ObjectKind::Pdf]) {
        return Some(object);
    }
    if output.len() > 1 {
        return output.first();
    }
    None
}

async fn save_output(ctx: &Context, object: &Object) -> Result<PathBuf, HttpError> {
    let file_name = format!("{}{}", object.name(), object.default_extension());
    let path = ctx.temporary_file(&file_name).await?;

    info!(output = %object.name(), path = %path.display(), "Saving output");
    let saved = object.save(&path).await;
    let exists = tokio::fs::try_exists(&path).await.unwrap_or(false);
    info!(output = %object.name(), exists, "Saved output");

    if let Err(err) = saved {
        warn!(output = %object.name(), error = %err, "Could not save output");
        return Err(HttpError::Internal(format!(
            "Could not save Output {} to {}",
            object.name(),
            file_name
        )));
    }
    Ok(path)
}

/// Stream the saved file, named after what is actually on disk.
async fn stream_file(path: &Path) -> Result<Response, HttpError> {
    let file = tokio::fs::File::open(path).await?;
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let disposition = format!("inline; filename=\"{}\"", header_safe(&file_name));

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}

/// Replace characters that cannot appear in a quoted header parameter.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == ' ' || (c.is_ascii_graphic() && c != '"' && c != '\\') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Read the request body as a form.
///
/// No `Content-Type` means an empty form. URL-encoded bodies yield plain
/// fields; anything else must be multipart.
async fn read_form(request: Request) -> Result<Form, HttpError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(mime_essence);

    match content_type.as_deref() {
        None => Ok(Form::Empty),
        Some("application/x-www-form-urlencoded") => {
            let axum::Form(fields) =
                axum::Form::<Vec<(String, String)>>::from_request(request, &()).await?;
            Ok(Form::Fields(fields))
        }
        Some(_) => Ok(Form::Multipart(
            Multipart::from_request(request, &()).await?,
        )),
    }
}

pub async fn execute_process(
    State(state): State<AppState>,
    RoutePath(process_name): RoutePath<String>,
    Query(query): Query<OutputQuery>,
    request: Request,
) -> Result<Response, HttpError> {
    let form = read_form(request).await?;
    let ctx = state.server.request_context(None);
    handle(
        &ctx,
        state.executor.as_ref(),
        &process_name,
        form,
        query.output_name.as_deref(),
    )
    .await
}

pub async fn execute_entrypoint(
    State(state): State<AppState>,
    Query(query): Query<OutputQuery>,
    request: Request,
) -> Result<Response, HttpError> {
    let Some(process_name) = state
        .server
        .config()
        .get_string(config_keys::ENTRYPOINT_PROCESS)
    else {
        return Err(HttpError::BadRequest("No entrypoint defined".to_string()));
    };

    let form = read_form(request).await?;
    let ctx = state.server.request_context(Some(process_name.clone()));
    handle(
        &ctx,
        state.executor.as_ref(),
        &process_name,
        form,
        query.output_name.as_deref(),
    )
    .await
}
