use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use service::account_service::{self, EditProfile};

use crate::auth::{CurrentAccount, ServerState};
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Fresh profile lookup for the authenticated caller. A valid token whose
/// account has since disappeared does not keep a session.
pub async fn me(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
) -> Result<Json<models::account::Model>, ApiError> {
    let account = account_service::get_profile(&state.db, account_id)
        .await?
        .ok_or_else(ApiError::unauthorized)?;
    Ok(Json(account))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Json(body): Json<EditUserRequest>,
) -> Result<Json<models::account::Model>, ApiError> {
    let updated = account_service::edit_profile(
        &state.db,
        account_id,
        EditProfile {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
        },
    )
    .await?;
    Ok(Json(updated))
}
