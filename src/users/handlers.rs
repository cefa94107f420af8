use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{UserCreate, UserPublic, UserUpdate};
use crate::users::services::{self, is_valid_email};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

fn validate_create(payload: &UserCreate) -> Result<(), ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }
    if let Some(name) = &payload.full_name {
        if name.len() < 3 {
            warn!("full name too short");
            return Err(ApiError::Validation("Full name too short".into()));
        }
    }
    Ok(())
}

fn validate_update(payload: &UserUpdate) -> Result<(), ApiError> {
    if let Some(email) = &payload.email {
        if !is_valid_email(email) {
            warn!(email = %email, "invalid email");
            return Err(ApiError::Validation("Invalid email".into()));
        }
    }
    if let Some(password) = &payload.password {
        if password.len() < 8 {
            warn!("password too short");
            return Err(ApiError::Validation("Password too short".into()));
        }
    }
    if let Some(name) = &payload.full_name {
        if name.len() < 3 {
            warn!("full name too short");
            return Err(ApiError::Validation("Full name too short".into()));
        }
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserPublic>), ApiError> {
    validate_create(&payload)?;
    let user = services::create_user(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserPublic>>, ApiError> {
    let users = services::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserPublic::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserPublic>, ApiError> {
    let user = services::get_user(&state.db, id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserPublic>, ApiError> {
    validate_update(&payload)?;
    let user = services::update_user(&state.db, id, payload).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserPublic>, ApiError> {
    let user = services::delete_user(&state.db, id).await?;
    Ok(Json(user.into()))
}
