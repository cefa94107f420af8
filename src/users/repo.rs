use sqlx::PgPool;

use crate::users::dto::{UserCreate, UserUpdate};
use crate::users::repo_types::User;

pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, full_name
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, full_name
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn list_all(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let rows = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, full_name
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(db: &PgPool, new: &UserCreate) -> Result<User, sqlx::Error> {
    // The password is written as received; hashing is still an open gap.
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, hashed_password, full_name)
        VALUES ($1, $2, $3)
        RETURNING id, email, hashed_password, full_name
        "#,
    )
    .bind(&new.email)
    .bind(&new.password)
    .bind(&new.full_name)
    .fetch_one(db)
    .await?;
    Ok(user)
}

/// Merge the supplied fields over the existing row. A `password` input
/// lands in the `hashed_password` column, still unhashed.
fn apply(existing: &User, changes: &UserUpdate) -> User {
    User {
        id: existing.id,
        email: changes
            .email
            .clone()
            .unwrap_or_else(|| existing.email.clone()),
        hashed_password: changes
            .password
            .clone()
            .unwrap_or_else(|| existing.hashed_password.clone()),
        full_name: changes
            .full_name
            .clone()
            .or_else(|| existing.full_name.clone()),
    }
}

pub async fn update(
    db: &PgPool,
    existing: &User,
    changes: &UserUpdate,
) -> Result<User, sqlx::Error> {
    let merged = apply(existing, changes);
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET email = $2, hashed_password = $3, full_name = $4
        WHERE id = $1
        RETURNING id, email, hashed_password, full_name
        "#,
    )
    .bind(merged.id)
    .bind(&merged.email)
    .bind(&merged.hashed_password)
    .bind(&merged.full_name)
    .fetch_one(db)
    .await?;
    Ok(user)
}

pub async fn delete(db: &PgPool, existing: &User) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        DELETE FROM users
        WHERE id = $1
        RETURNING id, email, hashed_password, full_name
        "#,
    )
    .bind(existing.id)
    .fetch_one(db)
    .await?;
    Ok(user)
}

#[cfg(test)]
mod apply_tests {
    use super::*;

    fn existing() -> User {
        User {
            id: 7,
            email: "a@x.com".into(),
            hashed_password: "longpass1".into(),
            full_name: None,
        }
    }

    #[test]
    fn full_name_only_leaves_email_unchanged() {
        let changes = UserUpdate {
            email: None,
            password: None,
            full_name: Some("Ana".into()),
        };
        let merged = apply(&existing(), &changes);
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.full_name.as_deref(), Some("Ana"));
        assert_eq!(merged.hashed_password, "longpass1");
    }

    #[test]
    fn password_lands_in_credential_column() {
        let changes = UserUpdate {
            email: None,
            password: Some("newsecret".into()),
            full_name: None,
        };
        let merged = apply(&existing(), &changes);
        assert_eq!(merged.hashed_password, "newsecret");
        assert_eq!(merged.email, "a@x.com");
    }

    #[test]
    fn empty_update_is_identity() {
        let changes = UserUpdate {
            email: None,
            password: None,
            full_name: None,
        };
        let before = existing();
        let merged = apply(&before, &changes);
        assert_eq!(merged.id, before.id);
        assert_eq!(merged.email, before.email);
        assert_eq!(merged.hashed_password, before.hashed_password);
        assert_eq!(merged.full_name, before.full_name);
    }
}
