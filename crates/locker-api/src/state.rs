use std::time::Duration;

use url::Url;

use crate::error::ProxyError;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub backend: Url,
    pub client: reqwest::Client,
}

impl AppState {
    /// `backend` is the origin of the REST service, e.g. `http://127.0.0.1:8080`.
    pub fn new(backend: &str) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(ProxyError::Upstream)?;
        Ok(Self {
            backend: Url::parse(backend)?,
            client,
        })
    }
}
