mod credential;
#[cfg(test)]
pub mod testing;
mod types;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as AsyncClient, Method, StatusCode};
use serde_json::Value;
use tokio::sync::broadcast;

pub use self::credential::Credential;
pub use self::types::{error_message, ApiError, RequestBody, SessionEvent};
use crate::config::{DEFAULT_API_URL, VERSION};

const JSON: &str = "application/json";

/// The one place backend calls go through.
///
/// Attaches the bearer credential, normalizes failures into [`ApiError`] and
/// owns the credential lifecycle: a 401 from any endpoint clears it and
/// broadcasts [`SessionEvent::Expired`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
    credential: Credential,
    events: broadcast::Sender<SessionEvent>,
}

impl HttpClient {
    pub fn new(credential: Credential, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(JSON));

        let ua = format!(
            "staffdir/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let (events, _) = broadcast::channel(16);

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers)
                .build()?,
            base_url,
            ua,
            credential,
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn has_credential(&self) -> bool {
        self.credential.is_present().await
    }

    pub async fn set_credential(&self, token: String) -> Result<()> {
        self.credential.set(token).await
    }

    pub async fn clear_credential(&self) -> Result<()> {
        self.credential.clear().await
    }

    async fn expire(&self) {
        log::debug!("Credential rejected, clearing it");

        if let Err(error) = self.credential.clear().await {
            log::warn!("Failed to clear the stored credential: {error}");
        }

        // no subscribers is fine
        self.events.send(SessionEvent::Expired).ok();
    }

    pub async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.expire().await;

                Err(ApiError::Unauthorized)
            }

            status if !status.is_success() => Err(self.handle_error(response, status).await),

            StatusCode::NO_CONTENT => Ok(None),

            _ => response
                .json::<T>()
                .await
                .map(Some)
                .map_err(ApiError::Decode),
        }
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> ApiError {
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                log::debug!("Error reading error body: {:#?}", err);

                None
            }
        };

        ApiError::from_status(status, error_message(status, body.as_deref()))
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        data: Option<RequestBody>,
        overrides: Option<HeaderMap>,
    ) -> Result<reqwest::Request, ApiError> {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = self.credential.get().await {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::Request("credential is not a valid header".to_string()))?;

            request = request.header(AUTHORIZATION, value);
        }

        request = match data {
            None => request.header(CONTENT_TYPE, JSON),

            Some(RequestBody::Json(value)) => request.header(CONTENT_TYPE, JSON).body(
                serde_json::to_vec(&value).map_err(|e| ApiError::Request(e.to_string()))?,
            ),

            Some(RequestBody::Form(fields)) => request.form(&fields),

            Some(RequestBody::Multipart(form)) => request.multipart(form),
        };

        if let Some(overrides) = overrides {
            request = request.headers(overrides);
        }

        request.build().map_err(|e| ApiError::Request(e.to_string()))
    }

    /// Sends a request and returns the raw JSON body, `None` for `204 No Content`.
    ///
    /// `overrides` replace the default headers, e.g. a different content type.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        data: Option<RequestBody>,
        overrides: Option<HeaderMap>,
    ) -> Result<Option<Value>, ApiError> {
        self.request_with(method, path, data, overrides).await
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        data: Option<RequestBody>,
    ) -> Result<Option<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request_with(method, path, data, None).await
    }

    async fn request_with<T>(
        &self,
        method: Method,
        path: &str,
        data: Option<RequestBody>,
        overrides: Option<HeaderMap>,
    ) -> Result<Option<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        // bodies stay out of the logs, the token request carries a password
        log::debug!("request: {} {}", method, path);

        let request = self.build_request(method, path, data, overrides).await?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::Network)?;

        #[cfg(debug_assertions)]
        log::debug!("response {} in: {:#?}", response.status(), now.elapsed());

        self.handle_response(response).await
    }
}
