//! Shared fixtures for procgate-axum integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use procgate_core::{
    ExecutionOptions, HostConfig, ObjectKind, Payload, Process, ProcessError, ProcessExecutor,
    ProcessInterface, ProcessRegistry, ServerContext,
};
use procgate_axum::{AxumContext, ServerConfig, create_router};
use serde_json::Value;

pub const TEST_CORS_ORIGIN: &str = "http://localhost:3000";
pub const BOUNDARY: &str = "procgate-test-boundary";

/// What the executor saw for one input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInput {
    pub name: String,
    pub kind: ObjectKind,
    pub extension: String,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub process: String,
    pub inputs: Vec<RecordedInput>,
    pub options: ExecutionOptions,
}

/// Registered only so the registry knows the name; the fake executor never
/// calls it.
struct Placeholder;

impl Process for Placeholder {
    fn interface(&self) -> ProcessInterface {
        ProcessInterface::default()
    }

    fn execute(&self, _input: Payload, _options: &ExecutionOptions) -> Result<Payload, ProcessError> {
        Err(ProcessError::Failed("placeholder process executed".into()))
    }
}

/// Executor that answers with scripted payloads and records its inputs.
#[derive(Default)]
pub struct ScriptedExecutor {
    outputs: Vec<(String, Option<Payload>)>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` succeeds with `output`.
    #[must_use]
    pub fn with_process(mut self, name: &str, output: Payload) -> Self {
        self.outputs.push((name.to_string(), Some(output)));
        self
    }

    /// `name` fails when executed.
    #[must_use]
    pub fn with_failing_process(mut self, name: &str) -> Self {
        self.outputs.push((name.to_string(), None));
        self
    }

    pub fn registry(&self) -> ProcessRegistry {
        let mut registry = ProcessRegistry::new();
        for (name, _) in &self.outputs {
            registry.register(name.clone(), Arc::new(Placeholder));
        }
        registry
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        name: &str,
        input: Payload,
        options: &ExecutionOptions,
    ) -> Result<Payload, ProcessError> {
        let inputs = input
            .iter()
            .map(|object| RecordedInput {
                name: object.name().to_string(),
                kind: object.kind(),
                extension: object.default_extension(),
            })
            .collect();
        self.calls.lock().unwrap().push(RecordedCall {
            process: name.to_string(),
            inputs,
            options: options.clone(),
        });

        match self.outputs.iter().find(|(n, _)| n == name) {
            Some((_, Some(output))) => Ok(output.clone()),
            Some((_, None)) => Err(ProcessError::Failed(format!("{name} blew up"))),
            None => Err(ProcessError::NotFound(name.to_string())),
        }
    }
}

/// Router over `executor` with the given host configuration.
pub fn app(config: Value, executor: Arc<ScriptedExecutor>) -> Router {
    app_with(config, executor, |server| server)
}

pub fn app_with(
    config: Value,
    executor: Arc<ScriptedExecutor>,
    adjust: impl FnOnce(ServerConfig) -> ServerConfig,
) -> Router {
    let host = HostConfig::from_value("/tmp/procgate-test/config.yaml", config);
    let server_config = adjust(ServerConfig::new("127.0.0.1", 0).with_host_config(&host));
    let registry = Arc::new(executor.registry());
    let server = ServerContext::new(host, registry).unwrap();
    create_router(AxumContext::new(server, executor), &server_config)
}

/// One part of a multipart body.
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub const fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }

    pub const fn file(
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    ) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content_type: Some(content_type),
            data,
        }
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{file_name}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// `POST uri` with a multipart form.
pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

/// `POST uri` without any body.
pub fn empty_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    use http_body_util::BodyExt;
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
