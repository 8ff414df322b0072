use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Validating { token: String },
    Authenticated { token: String, username: Option<String> },
}

impl SessionState {
    // A persisted token is not trusted until a probe fetch accepts it.
    pub fn bootstrap(stored_token: Option<String>) -> Self {
        match stored_token {
            Some(token) if !token.is_empty() => {
                info!("found persisted token, validating");
                Self::Validating { token }
            }
            _ => Self::Unauthenticated,
        }
    }

    pub fn logged_in(token: String, username: Option<String>) -> Self {
        info!(username = ?username, "session authenticated");
        Self::Authenticated { token, username }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Validating { token } | Self::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username, .. } => username.as_deref(),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_validating(&self) -> bool {
        matches!(self, Self::Validating { .. })
    }

    pub fn probe_succeeded(self) -> Self {
        match self {
            Self::Validating { token } => {
                info!("startup probe accepted persisted token");
                Self::Authenticated {
                    token,
                    username: None,
                }
            }
            other => other,
        }
    }

    // Rejected token is indistinguishable from an explicit logout.
    pub fn probe_failed(self) -> Self {
        if self.is_validating() {
            info!("startup probe rejected persisted token, discarding");
        }
        Self::Unauthenticated
    }

    pub fn logged_out(self) -> Self {
        info!("session cleared");
        Self::Unauthenticated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

impl AuthView {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_without_token_is_unauthenticated() {
        assert_eq!(SessionState::bootstrap(None), SessionState::Unauthenticated);
        assert_eq!(
            SessionState::bootstrap(Some(String::new())),
            SessionState::Unauthenticated
        );
    }

    #[test]
    fn bootstrap_with_token_validates_then_authenticates() {
        let session = SessionState::bootstrap(Some("tok-1".to_string()));
        assert!(session.is_validating());
        assert_eq!(session.token(), Some("tok-1"));

        let session = session.probe_succeeded();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
    }

    #[test]
    fn failed_probe_discards_the_token() {
        let session = SessionState::bootstrap(Some("tok-2".to_string()));
        let session = session.probe_failed();
        assert_eq!(session, SessionState::Unauthenticated);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn login_and_logout_round_trip() {
        let session = SessionState::logged_in("tok-3".to_string(), Some("ana".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("ana"));

        let session = session.logged_out();
        assert_eq!(session, SessionState::Unauthenticated);
    }

    #[test]
    fn probe_transitions_only_apply_to_validating() {
        let session = SessionState::Unauthenticated.probe_succeeded();
        assert_eq!(session, SessionState::Unauthenticated);

        let session =
            SessionState::logged_in("tok-4".to_string(), None).probe_succeeded();
        assert!(session.is_authenticated());
    }

    #[test]
    fn auth_view_toggles_between_forms() {
        assert_eq!(AuthView::Login.toggled(), AuthView::Register);
        assert_eq!(AuthView::Register.toggled(), AuthView::Login);
    }
}
