use std::sync::Arc;

use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier},
    Argon2,
};
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension, Json,
};
use cryptofolio_core::session::UserSession;
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

#[derive(Clone)]
pub struct AuthConfig {
    /// Argon2 PHC string
    pub password_hash: String,
}

pub struct AuthManager {
    password_hash: String,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    InvalidCredentials,
    InvalidEmail,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub requires_password: bool,
    pub signed_in: bool,
    pub email: Option<String>,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> anyhow::Result<Self> {
        PasswordHash::new(&config.password_hash)?;
        Ok(Self {
            password_hash: config.password_hash.clone(),
        })
    }

    pub fn verify_password(&self, candidate: &str) -> Result<(), AuthError> {
        let parsed = PasswordHash::new(&self.password_hash).map_err(|e| {
            AuthError::Internal(format!("Invalid password hash configuration: {e}"))
        })?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Internal(format!("Password verification failed: {other}")),
            })
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid password".to_string())
            }
            AuthError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "A valid email address is required".to_string(),
            ),
            AuthError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserSession>, AuthError> {
    if !is_plausible_email(&payload.email) {
        return Err(AuthError::InvalidEmail);
    }
    if let Some(auth) = state.auth.as_ref() {
        let password = payload
            .password
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        auth.verify_password(password)?;
    }

    if let Some(previous) = state.session.current() {
        if previous.user_id != payload.email.trim().to_lowercase() {
            state.refresher.reset();
        }
    }
    let session = state.session.login(&payload.email);
    state.refresh_wake.notify_one();
    Ok(Json(session))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.session.logout();
    state.refresher.reset();
    StatusCode::NO_CONTENT
}

pub async fn auth_status(State(state): State<Arc<AppState>>) -> Json<AuthStatusResponse> {
    let current = state.session.current();
    Json(AuthStatusResponse {
        requires_password: state.auth.is_some(),
        signed_in: current.is_some(),
        email: current.map(|session| session.email),
    })
}

pub async fn current_session(Extension(session): Extension<UserSession>) -> Json<UserSession> {
    Json(session)
}

/// Rejects requests while nobody is signed in; otherwise exposes the
/// [`UserSession`] as a request extension.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let session = state.session.current().ok_or(AuthError::Unauthorized)?;
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
