//! User Repository

use super::{RepoError, RepoResult};
use shared::models::User;
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, name, email, image, hash_pass, created_at FROM user";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE id = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{} WHERE email = ?", USER_SELECT);
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a new account. The unique index on `email` rejects duplicates.
pub async fn create(
    pool: &SqlitePool,
    name: Option<String>,
    email: String,
    image: Option<String>,
    hash_pass: &str,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO user (id, name, email, image, hash_pass, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&image)
    .bind(hash_pass)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let db = DbService::in_memory().await.unwrap();
        create(&db.pool, None, "a@example.com".into(), None, "h")
            .await
            .unwrap();
        let err = create(&db.pool, None, "A@Example.com".into(), None, "h")
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn lookup_by_email() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(
            &db.pool,
            Some("Aisha".into()),
            "a@example.com".into(),
            None,
            "h",
        )
        .await
        .unwrap();
        let found = find_by_email(&db.pool, "a@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert!(find_by_email(&db.pool, "b@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
