use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use service::bookmark::domain::{CreateBookmark, EditBookmark};
use service::bookmark::repo::seaorm::SeaOrmBookmarkRepository;
use service::bookmark::BookmarkService;

use crate::auth::{CurrentAccount, ServerState};
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Build the bookmark service with its store dependency passed explicitly.
fn bookmark_service(state: &ServerState) -> BookmarkService<SeaOrmBookmarkRepository> {
    BookmarkService::new(Arc::new(SeaOrmBookmarkRepository { db: state.db.clone() }))
}

pub async fn create(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Json(body): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<models::bookmark::Model>), ApiError> {
    let created = bookmark_service(&state)
        .create(account_id, CreateBookmark {
            title: body.title,
            description: body.description,
            link: body.link,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
) -> Result<Json<Vec<models::bookmark::Model>>, ApiError> {
    let rows = bookmark_service(&state).list(account_id).await?;
    Ok(Json(rows))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Path(id): Path<i64>,
) -> Result<Json<models::bookmark::Model>, ApiError> {
    let bookmark = bookmark_service(&state).get(account_id, id).await?;
    Ok(Json(bookmark))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Path(id): Path<i64>,
    Json(body): Json<EditBookmarkRequest>,
) -> Result<Json<models::bookmark::Model>, ApiError> {
    let updated = bookmark_service(&state)
        .edit(account_id, id, EditBookmark {
            title: body.title,
            description: body.description,
            link: body.link,
        })
        .await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    bookmark_service(&state).delete(account_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
