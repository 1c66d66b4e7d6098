//! Member Repository

use super::{RepoError, RepoResult};
use shared::models::{Member, MemberProfileCreate, RecipientWithUser};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, user_id, role, blood_type, age, gender, location, location_permission_granted, latitude, longitude, phone, bio, profile_completed, created_at FROM member";

/// Recipient listing joined with the owning user. The COALESCE chain is the
/// display-name fallback: name, then email, then "Unknown".
const RECIPIENT_WITH_USER_SELECT: &str = "SELECT m.id, m.user_id, m.role, m.blood_type, m.age, m.gender, m.location, m.location_permission_granted, m.latitude, m.longitude, m.phone, m.bio, m.profile_completed, m.created_at, COALESCE(u.name, u.email, 'Unknown') AS user_name, u.email AS user_email, u.image AS user_image FROM member m JOIN user u ON m.user_id = u.id";

pub async fn find_by_user_id(pool: &SqlitePool, user_id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{} WHERE user_id = ?", MEMBER_SELECT);
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{} WHERE id = ?", MEMBER_SELECT);
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert the caller's member profile.
///
/// `profile_completed` is set on insert and `bio` defaults to the empty
/// string. The unique index on `user_id` turns a concurrent duplicate insert
/// into [`RepoError::Duplicate`].
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    data: MemberProfileCreate,
) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO member (id, user_id, role, blood_type, age, gender, location, location_permission_granted, phone, bio, profile_completed, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 1, ?11)",
    )
    .bind(id)
    .bind(user_id)
    .bind(data.role)
    .bind(data.blood_type)
    .bind(data.age)
    .bind(data.gender)
    .bind(&data.location)
    .bind(data.location_permission_granted)
    .bind(&data.phone)
    .bind(data.bio.unwrap_or_default())
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}

/// All members with the recipient role, newest first, joined with user info.
pub async fn find_recipients(pool: &SqlitePool) -> RepoResult<Vec<RecipientWithUser>> {
    let sql = format!(
        "{} WHERE m.role = 'recipient' ORDER BY m.created_at DESC",
        RECIPIENT_WITH_USER_SELECT
    );
    let rows = sqlx::query_as::<_, RecipientWithUser>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Set the caller's coordinates. The rest of the profile is immutable after
/// creation.
pub async fn update_location(
    pool: &SqlitePool,
    user_id: i64,
    latitude: f64,
    longitude: f64,
) -> RepoResult<Member> {
    let rows = sqlx::query("UPDATE member SET latitude = ?1, longitude = ?2 WHERE user_id = ?3")
        .bind(latitude)
        .bind(longitude)
        .bind(user_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "No member profile for user {user_id}"
        )));
    }
    find_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("No member profile for user {user_id}")))
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM member")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
