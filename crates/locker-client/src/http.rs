use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::AuthService;
use crate::documents::DocumentService;
use crate::error::ClientError;
use crate::session::SessionStore;
use crate::users::UserService;

/// Shared handle to the REST backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    inner: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    /// `base` is the origin serving `/api/*`, e.g. `http://127.0.0.1:3000`.
    pub fn new(base: &str, session: SessionStore) -> Result<Self, ClientError> {
        Ok(Self {
            base: Url::parse(base)?,
            inner: reqwest::Client::new(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.clone())
    }

    pub fn documents(&self) -> DocumentService {
        DocumentService::new(self.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    /// Request carrying the current auth header (none when signed out).
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "api request");
        self.inner
            .request(method, url)
            .headers(self.session.auth_header())
    }

    pub(crate) fn anonymous(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "api request");
        self.inner.request(method, url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url)).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.request(method, url).json(body)).await
    }

    /// Sends the request; non-2xx answers become [`ClientError::Api`] or
    /// [`ClientError::Status`].
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
