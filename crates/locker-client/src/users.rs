use locker_types::User;

use crate::error::ClientError;
use crate::http::ApiClient;

const USERS_PATH: &str = "/api/users";

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<User>, ClientError> {
        self.api.get(USERS_PATH).await
    }
}
