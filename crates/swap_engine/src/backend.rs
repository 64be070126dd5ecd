use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use swap_core::RequestBody;
use swap_logging::{swap_debug, swap_warn};

use crate::settings::{join_url, ClientSettings};
use crate::types::{map_backend_error, BackendError};

/// Credentialed calls to the auth/listing backend.
///
/// Implementations report non-2xx answers as [`BackendError::HttpStatus`], never
/// retry, and never touch client state.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn post(&self, path: &str, body: &RequestBody) -> Result<(), BackendError>;

    async fn delete(&self, path: &str) -> Result<(), BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: &ClientSettings) -> Result<Self, BackendError> {
        let base = join_url(&settings.backend_url, "/")
            .map_err(|err| BackendError::InvalidUrl(err.to_string()))?;

        // Session cookies issued by the backend ride along on later calls.
        let jar = Arc::new(Jar::default());
        if let Some(token) = settings.api_token.as_deref() {
            jar.add_cookie_str(&format!("api_token={token}; Path=/"), &base);
        }

        let client = reqwest::Client::builder()
            .cookie_provider(jar)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_backend_error)?;

        Ok(Self {
            base_url: settings.backend_url.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, BackendError> {
        join_url(&self.base_url, path).map_err(|err| BackendError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn post(&self, path: &str, body: &RequestBody) -> Result<(), BackendError> {
        let url = self.url(path)?;
        swap_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_backend_error)?;
        ensure_success(path, response.status())
    }

    async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let url = self.url(path)?;
        swap_debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_backend_error)?;
        ensure_success(path, response.status())
    }
}

fn ensure_success(path: &str, status: reqwest::StatusCode) -> Result<(), BackendError> {
    if status.is_success() {
        Ok(())
    } else {
        swap_warn!("{} answered {}", path, status);
        Err(BackendError::HttpStatus(status.as_u16()))
    }
}
