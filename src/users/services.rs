use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::users::dto::{UserCreate, UserUpdate};
use crate::users::repo;
use crate::users::repo_types::User;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub async fn create_user(db: &PgPool, new: UserCreate) -> Result<User, ApiError> {
    // The email must not already be taken.
    if repo::find_by_email(db, &new.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".into()));
    }
    let user = repo::create(db, &new).await?;
    info!(user_id = user.id, email = %user.email, "user created");
    Ok(user)
}

pub async fn list_users(db: &PgPool) -> Result<Vec<User>, ApiError> {
    Ok(repo::list_all(db).await?)
}

pub async fn get_user(db: &PgPool, id: i64) -> Result<User, ApiError> {
    repo::find_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}

pub async fn update_user(db: &PgPool, id: i64, changes: UserUpdate) -> Result<User, ApiError> {
    let existing = get_user(db, id).await?;
    let user = repo::update(db, &existing, &changes).await?;
    info!(user_id = user.id, "user updated");
    Ok(user)
}

pub async fn delete_user(db: &PgPool, id: i64) -> Result<User, ApiError> {
    let existing = get_user(db, id).await?;
    let user = repo::delete(db, &existing).await?;
    info!(user_id = user.id, "user deleted");
    Ok(user)
}
