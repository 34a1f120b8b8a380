//! Multipart form intake.
//!
//! Turns an uploaded form into an input [`Payload`]: files are streamed into
//! the request's temporary area and loaded from there, text fields go through
//! [`Object::from_value`].

use axum::extract::Multipart;
use procgate_core::{Context, Object, Payload};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::HttpError;

/// Preferred extension for MIME types that map to several.
const PREFERRED_EXTENSIONS: &[(&str, &str)] = &[
    ("application/octet-stream", "bin"),
    ("audio/mpeg", "mp3"),
    ("image/jpeg", "jpg"),
    ("image/svg+xml", "svg"),
    ("image/tiff", "tiff"),
    ("text/html", "html"),
    ("text/plain", "txt"),
    ("video/mpeg", "mpeg"),
];

/// Request body as seen by the process routes.
pub enum Form {
    Multipart(Multipart),
    /// `application/x-www-form-urlencoded` fields, in body order.
    Fields(Vec<(String, String)>),
    /// No body was sent at all.
    Empty,
}

pub(crate) fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Extension (without dot) conventionally used for `content_type`.
pub fn extension_for_mime(content_type: &str) -> Option<&'static str> {
    let essence = mime_essence(content_type);
    PREFERRED_EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
        .or_else(|| mime_guess::get_mime_extensions_str(&essence)?.first().copied())
}

/// Name of the temporary copy of an uploaded file.
///
/// Directory components sent by the client are dropped. Unless the filename
/// already ends in exactly the extension implied by the declared MIME type,
/// that extension is appended (`photo.jpg` declared as `image/png` becomes
/// `photo.jpg.png`, `scan.PDF` declared as `application/pdf` becomes
/// `scan.PDF.pdf`).
pub fn upload_file_name(file_name: &str, content_type: Option<&str>) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let base = if base.is_empty() { "upload" } else { base };

    let Some(content_type) = content_type else {
        return base.to_string();
    };
    let Some(expected) = extension_for_mime(content_type) else {
        return base.to_string();
    };

    let current = base
        .rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .map(|(_, ext)| ext);

    match current {
        Some(ext) if ext == expected => base.to_string(),
        _ => format!("{base}.{expected}"),
    }
}

/// Build the input payload from the request form.
///
/// Every file is added individually under its field name, so a field carrying
/// several files yields several objects with the same name.
pub async fn payload_from_form(ctx: &Context, form: Form) -> Result<Payload, HttpError> {
    let mut payload = Payload::new();
    let mut multipart = match form {
        Form::Multipart(multipart) => multipart,
        Form::Fields(fields) => {
            for (name, value) in fields {
                if let Some(object) = Object::from_value(Value::String(value)) {
                    payload.add(object, name);
                }
            }
            return Ok(payload);
        }
        Form::Empty => return Ok(payload),
    };

    while let Some(mut field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let text = field.text().await?;
            if let Some(object) = Object::from_value(Value::String(text)) {
                payload.add(object, name);
            }
            continue;
        };

        let target = upload_file_name(&file_name, field.content_type());
        let path = ctx.temporary_file(&target).await?;

        let mut file = tokio::fs::File::create(&path).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        drop(file);

        // Browsers submit an empty part for file inputs left blank.
        if file_name.is_empty() && written == 0 {
            debug!(field = %name, "Skipping empty upload");
            continue;
        }

        debug!(field = %name, path = %path.display(), bytes = written, "Stored upload");
        payload.add_file(&path, name).await?;
    }

    Ok(payload)
}
