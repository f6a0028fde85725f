//! Subskribe HTTP service implementation.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use subskribe_usage::RawUsageData;

use crate::config::ServiceConfig;
use crate::error::{ClientError, Result};
use crate::response::Response;

/// Authentication header sent on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Content type for JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Usage submission endpoint.
pub const USAGE_PATH: &str = "/v2/usage";

/// Content type of the file part in multipart uploads.
const FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// Authenticated calls against the Subskribe API.
///
/// Paths are relative to the configured base URL (e.g. `"/tenants"`). Every
/// method performs exactly one round trip and returns a [`Response`] only for
/// status 200 or 201; any other status is a [`ClientError::Api`].
#[async_trait]
pub trait HttpService: Send + Sync {
    /// `GET` without query parameters.
    ///
    /// # Errors
    ///
    /// Transport failure, timeout, or a non-success status.
    async fn get(&self, path: &str) -> Result<Response> {
        self.get_query(path, &HashMap::new()).await
    }

    /// `GET` with `params` encoded as the query string. An empty map adds none.
    ///
    /// # Errors
    ///
    /// Transport failure, timeout, or a non-success status.
    async fn get_query(&self, path: &str, params: &HashMap<String, String>) -> Result<Response>;

    /// `POST` a raw body. `Content-Type` is set only when `content_type` is non-empty.
    ///
    /// # Errors
    ///
    /// Transport failure, timeout, or a non-success status.
    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Response>;

    /// `PUT` a raw body.
    ///
    /// # Errors
    ///
    /// Transport failure, timeout, or a non-success status.
    async fn put(&self, path: &str, body: Vec<u8>) -> Result<Response>;

    /// `DELETE` with an empty body.
    ///
    /// # Errors
    ///
    /// Transport failure, timeout, or a non-success status.
    async fn delete(&self, path: &str) -> Result<Response>;

    /// `POST` a `multipart/form-data` body holding the file at `file_path`
    /// under `file_field`, followed by one text field per entry of `params`.
    ///
    /// # Errors
    ///
    /// [`ClientError::File`] if the file cannot be read, otherwise as for
    /// [`HttpService::post`].
    async fn multipart_post(
        &self,
        path: &str,
        params: &HashMap<String, String>,
        file_field: &str,
        file_path: &Path,
    ) -> Result<Response>;
}

/// [`HttpService`] backed by a `reqwest` client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SubskribeService {
    client: Client,
    config: ServiceConfig,
}

impl SubskribeService {
    /// Create a service for `config`. The timeout applies to every call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serialize `value` as JSON and `POST` it.
    ///
    /// # Errors
    ///
    /// [`ClientError::Serialization`] if `value` cannot be encoded, otherwise
    /// as for [`HttpService::post`].
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<Response> {
        let body = serde_json::to_vec(value)?;
        self.post(path, body, JSON_CONTENT_TYPE).await
    }

    /// Submit a usage batch to `/v2/usage`.
    ///
    /// # Errors
    ///
    /// As for [`SubskribeService::post_json`].
    pub async fn submit_usage(&self, usage: &RawUsageData) -> Result<Response> {
        tracing::info!(records = usage.len(), "Submitting usage batch");
        self.post_json(USAGE_PATH, usage).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.api_key)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        tracing::info!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        process_response(response).await
    }
}

#[async_trait]
impl HttpService for SubskribeService {
    async fn get_query(&self, path: &str, params: &HashMap<String, String>) -> Result<Response> {
        let mut builder = self.request(Method::GET, path);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        self.execute(builder).await
    }

    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Response> {
        let mut builder = self.request(Method::POST, path).body(body);
        if !content_type.is_empty() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        self.execute(builder).await
    }

    async fn put(&self, path: &str, body: Vec<u8>) -> Result<Response> {
        self.execute(self.request(Method::PUT, path).body(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    async fn multipart_post(
        &self,
        path: &str,
        params: &HashMap<String, String>,
        file_field: &str,
        file_path: &Path,
    ) -> Result<Response> {
        let contents = tokio::fs::read(file_path)
            .await
            .map_err(|source| ClientError::File {
                path: file_path.to_path_buf(),
                source,
            })?;

        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(
            file = %file_path.display(),
            bytes = contents.len(),
            fields = params.len(),
            "Building multipart body"
        );

        let file_part = Part::bytes(contents)
            .file_name(file_name)
            .mime_str(FILE_CONTENT_TYPE)?;

        let form = params.iter().fold(
            Form::new().part(file_field.to_string(), file_part),
            |form, (key, value)| form.text(key.clone(), value.clone()),
        );

        self.execute(self.request(Method::POST, path).multipart(form))
            .await
    }
}

/// Read the whole body and classify the response.
async fn process_response(response: reqwest::Response) -> Result<Response> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    tracing::debug!(status = %status, bytes = body.len(), "Response received");

    if status == StatusCode::OK || status == StatusCode::CREATED {
        return Ok(Response {
            status,
            body,
            headers,
        });
    }

    Err(ClientError::Api {
        status: status.as_u16(),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
