use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("authentication required")]
    Auth,

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    // Rejected or expired token on an authenticated call. Callers treat this
    // as an implicit logout rather than a user-visible error.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_surfaces_verbatim() {
        let err = ApiError::http(400, "Username already exists");
        assert_eq!(err.to_string(), "Username already exists");
    }

    #[test]
    fn auth_is_distinguished_from_plain_api_errors() {
        assert!(ApiError::Auth.is_auth());
        assert!(!ApiError::http(401, "Invalid username or password").is_auth());
        assert!(!ApiError::network("fetch aborted").is_auth());
    }
}
