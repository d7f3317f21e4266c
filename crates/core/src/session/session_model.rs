use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl UserSession {
    /// The user id is the lower-cased, trimmed email.
    pub fn for_email(email: &str) -> Self {
        let email = email.trim().to_string();
        Self {
            user_id: email.to_lowercase(),
            email,
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(UserSession),
}

/// Holds the current session. Created once and passed to whoever needs it.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: RwLock<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in `email`, replacing any previous session.
    pub fn login(&self, email: &str) -> UserSession {
        let session = UserSession::for_email(email);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = SessionState::SignedIn(session.clone());
        info!("User {} signed in", session.user_id);
        session
    }

    /// Signs out, returning the session that was active.
    pub fn logout(&self) -> Option<UserSession> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match std::mem::take(&mut *state) {
            SessionState::SignedIn(session) => {
                info!("User {} signed out", session.user_id);
                Some(session)
            }
            SessionState::SignedOut => None,
        }
    }

    pub fn current(&self) -> Option<UserSession> {
        match &*self.state.read().unwrap_or_else(PoisonError::into_inner) {
            SessionState::SignedIn(session) => Some(session.clone()),
            SessionState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }
}
