use thiserror::Error;

/// Failure of a call against the REST backend.
///
/// `Display` is the text shown to the user: the server's own `message` when
/// it sent one, otherwise a transport-level description.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session storage unavailable: {0}")]
    Storage(String),

    #[error("Invalid API address: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status(status) => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error built from a non-success response body.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody {
                message: Some(message),
            }) if !message.is_empty() => ClientError::Api { status, message },
            _ => ClientError::Status(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        let err = ClientError::from_response(400, br#"{"message":"Error: Username is already taken!"}"#);
        assert_eq!(err.to_string(), "Error: Username is already taken!");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn falls_back_to_status_text() {
        let err = ClientError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");

        let err = ClientError::from_response(401, br#"{"message":""}"#);
        assert_eq!(err.to_string(), "Request failed with status code 401");
    }
}
