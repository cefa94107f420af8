use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                   // surrogate key, assigned on insert
    pub email: String,             // unique across all rows
    #[serde(skip_serializing)]
    pub hashed_password: String,   // holds the raw password today; hashing is not wired in yet
    pub full_name: Option<String>, // optional display name
}
