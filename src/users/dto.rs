use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Request body for a partial update. Absent fields leave the stored
/// column unchanged.
#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@x.com".into(),
            hashed_password: "longpass1".into(),
            full_name: None,
        }
    }

    #[test]
    fn public_shape_never_contains_password() {
        let public = UserPublic::from(sample_user());
        let json = serde_json::to_value(&public).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "email": "a@x.com", "full_name": null})
        );
    }

    #[test]
    fn user_row_serialization_skips_credential_column() {
        let json = serde_json::to_value(sample_user()).expect("serialize");
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn update_from_empty_body_has_no_fields_set() {
        let upd: UserUpdate = serde_json::from_str("{}").expect("deserialize");
        assert!(upd.email.is_none());
        assert!(upd.password.is_none());
        assert!(upd.full_name.is_none());
    }

    #[test]
    fn update_with_only_full_name_leaves_the_rest_unset() {
        let upd: UserUpdate =
            serde_json::from_str(r#"{"full_name": "Ana"}"#).expect("deserialize");
        assert_eq!(upd.full_name.as_deref(), Some("Ana"));
        assert!(upd.email.is_none());
        assert!(upd.password.is_none());
    }
}
