use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use crate::auth::dto::UpdateProfileRequest;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String, // Argon2 hash, never exposed in JSON
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub job: Option<String>,
    pub location: Option<String>,
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by username. Usernames are case-sensitive and unique.
    pub async fn find_by_username(db: &SqlitePool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, gender, age, job, location, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, gender, age, job, location, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password.
    pub async fn create(
        db: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?, ?, ?)
            RETURNING id, username, password_hash, gender, age, job, location, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Full replace of the mutable profile fields for one user.
    pub async fn update_profile(
        db: &SqlitePool,
        user_id: i64,
        profile: &UpdateProfileRequest,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET gender = ?, age = ?, job = ?, location = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.gender)
        .bind(profile.age)
        .bind(&profile.job)
        .bind(&profile.location)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
