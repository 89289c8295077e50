use std::borrow::Cow;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::config::Config;
use super::envelope::unwrap_envelope;
use super::error::{DoorayError, DoorayResult};

/// Path prefix of the Dooray project API.
pub const PROJECT_API: &str = "/project/v1";

/// Percent-encode an id so it stays a single path segment.
pub fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Client for the Dooray project API.
///
/// Cheap to clone: the config is shared and `reqwest::Client` pools
/// connections internally.
#[derive(Clone, Debug)]
pub struct DoorayClient {
    config: Arc<Config>,
    client: Client,
}

impl DoorayClient {
    pub fn new(config: Config) -> DoorayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DoorayError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> DoorayResult<Value> {
        let mut request = self.request(Method::GET, path);
        if let Some(query) = query {
            request = request.query(query);
        }
        self.send(Method::GET, path, request).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> DoorayResult<Value> {
        let request = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, request).await
    }

    /// PUT with a JSON body; `None` sends `{}`.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> DoorayResult<Value> {
        let request = self.request(Method::PUT, path);
        let request = match body {
            Some(body) => request.json(body),
            None => request.json(&json!({})),
        };
        self.send(Method::PUT, path, request).await
    }

    pub async fn delete(&self, path: &str) -> DoorayResult<Value> {
        let request = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}{}", self.config.base_url(), PROJECT_API, path);
        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.config.authorization())
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> DoorayResult<Value> {
        debug!(%method, path, "dooray request");

        let result = match request.send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(DoorayError::from(e)),
        };

        if let Err(e) = &result {
            warn!(%method, path, error = %e, "dooray request failed");
        }
        result
    }

    /// Turn an HTTP response into the envelope's `result`.
    ///
    /// Non-2xx statuses become [`DoorayError::Transport`] carrying the body;
    /// a failed envelope becomes [`DoorayError::RemoteApi`].
    pub async fn handle_response(response: Response) -> DoorayResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DoorayError::Transport {
                status: Some(status.as_u16()),
                body,
            });
        }

        let bytes = response.bytes().await?;
        unwrap_envelope(&bytes)
    }
}
