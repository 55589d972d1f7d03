use crate::config::ClientConfig;
use crate::resources::{
    AdminsService, HubsService, OrganizationService, TasksService, TeamsService, WorkersService,
};
use crate::utils::error::{OnfleetError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Onfleet API client.
///
/// Holds the resolved base URL and an HTTP client whose default headers
/// carry the Basic-Auth credentials, so every outgoing request is
/// authenticated. Resource methods are reached through the accessor
/// handles: `client.tasks().list(None).await`.
///
/// The client holds no mutable state; clone it freely or share it behind
/// a reference.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Build a client for the default Onfleet endpoint.
    ///
    /// The API key is sent as the Basic-Auth username with an empty
    /// password on every request.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Build a client from a full configuration, honoring the base-URL
    /// override and request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.resolved_base_url())?;

        let mut builder =
            reqwest::Client::builder().default_headers(basic_auth_headers(&config.api_key)?);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build()?;

        Ok(Self { base_url, http })
    }

    /// Build a request for `path` relative to the base URL.
    ///
    /// A body, when given, is serialized to JSON and tagged with a JSON
    /// content type; without one no content-type header is set. Every
    /// request asks for a JSON response.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request> {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(OnfleetError::SerializeError)?;
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Execute a request and decode the JSON response into `T`.
    ///
    /// Any status outside 2xx becomes an `ApiError` carrying the status,
    /// the request path and the raw body text when it could be read.
    /// Dropping the returned future aborts the in-flight request.
    pub async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        let path = request.url().path().to_string();
        tracing::debug!("Making API request to: {}", request.url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.ok().filter(|text| !text.is_empty());
            return Err(OnfleetError::ApiError {
                status: status.as_u16(),
                path,
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(OnfleetError::DecodeError)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.new_request::<()>(Method::GET, path, None)?;
        self.execute(request).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(Method::PUT, path, Some(body))?;
        self.execute(request).await
    }

    pub fn admins(&self) -> AdminsService<'_> {
        AdminsService::new(self)
    }

    pub fn tasks(&self) -> TasksService<'_> {
        TasksService::new(self)
    }

    pub fn teams(&self) -> TeamsService<'_> {
        TeamsService::new(self)
    }

    pub fn workers(&self) -> WorkersService<'_> {
        WorkersService::new(self)
    }

    pub fn hubs(&self) -> HubsService<'_> {
        HubsService::new(self)
    }

    pub fn organization(&self) -> OrganizationService<'_> {
        OrganizationService::new(self)
    }
}

fn basic_auth_headers(api_key: &str) -> Result<HeaderMap> {
    let credentials = STANDARD.encode(format!("{}:", api_key));
    let mut auth = HeaderValue::from_str(&format!("Basic {}", credentials)).map_err(|_| {
        OnfleetError::InvalidConfigValueError {
            field: "api_key".to_string(),
            value: "<redacted>".to_string(),
            reason: "Key cannot be encoded as an Authorization header".to_string(),
        }
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}
