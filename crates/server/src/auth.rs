use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tracing::warn;

use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

/// Authenticated caller identity, injected by [`require_bearer_token`].
#[derive(Clone, Copy, Debug)]
pub struct CurrentAccount(pub i64);

/// Build the auth service with its store dependency passed explicitly.
pub fn auth_service(state: &ServerState) -> AuthService<SeaOrmAuthRepository> {
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    AuthService::new(
        repo,
        AuthConfig {
            jwt_secret: state.auth.jwt_secret.clone(),
            token_ttl_minutes: state.auth.token_ttl_minutes,
        },
    )
}

/// Route layer for protected routes: checks `Authorization: Bearer <token>`,
/// verifies it and injects the caller's account id before any handler runs.
/// Absent, malformed or expired tokens are rejected with 401.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_owned();

    let authz = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let token = match authz.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            warn!(path = %path, "missing or malformed Authorization header");
            return Err(ApiError::unauthorized());
        }
    };

    let account_id = auth_service(&state).verify_token(&token).map_err(|e| {
        warn!(path = %path, code = e.code(), "token validation failed");
        ApiError::unauthorized()
    })?;

    req.extensions_mut().insert(CurrentAccount(account_id));
    Ok(next.run(req).await)
}
