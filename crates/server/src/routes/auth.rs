use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use service::auth::domain::{LoginInput, RegisterInput};

use crate::auth::{auth_service, ServerState};
use crate::errors::ApiError;

/// Whitelist-validated credential body shared by signup and signin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// The single documented auth contract: both signup and signin respond
/// with a bearer token (signup auto-signs-in the fresh account).
#[derive(Serialize)]
pub struct TokenOutput {
    pub access_token: String,
}

pub async fn signup(
    State(state): State<ServerState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<TokenOutput>), ApiError> {
    let session = auth_service(&state)
        .register(RegisterInput { email: body.email, password: body.password })
        .await?;
    Ok((StatusCode::CREATED, Json(TokenOutput { access_token: session.token })))
}

pub async fn signin(
    State(state): State<ServerState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<TokenOutput>, ApiError> {
    let session = auth_service(&state)
        .login(LoginInput { email: body.email, password: body.password })
        .await?;
    Ok(Json(TokenOutput { access_token: session.token }))
}
