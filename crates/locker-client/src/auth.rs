use locker_types::{LoginRequest, MessageResponse, Session, SignupRequest};
use reqwest::Method;
use tracing::info;

use crate::error::ClientError;
use crate::http::ApiClient;

const SIGNIN_PATH: &str = "/api/auth/signin";
const SIGNUP_PATH: &str = "/api/auth/signup";

/// Sign-in, registration and sign-out.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Signs in and persists the returned session when it carries a token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ClientError> {
        let url = self.api.url(SIGNIN_PATH)?;
        let session: Session = self
            .api
            .send(self.api.anonymous(Method::POST, url).json(credentials))
            .await?;

        if !session.token.is_empty() {
            self.api.session().save(&session)?;
            info!(username = %session.username, "signed in");
        }
        Ok(session)
    }

    pub async fn register(&self, request: &SignupRequest) -> Result<MessageResponse, ClientError> {
        let url = self.api.url(SIGNUP_PATH)?;
        self.api
            .send(self.api.anonymous(Method::POST, url).json(request))
            .await
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.api.session().clear()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.api.session().current()
    }

    pub fn auth_header(&self) -> reqwest::header::HeaderMap {
        self.api.session().auth_header()
    }
}
