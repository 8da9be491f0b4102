use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::prelude::Result;

pub struct UserSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> UserSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        UserSelector { pool }
    }

    pub async fn get_by_id(&mut self, user_id: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, username, email, password_hash, name, role, created_at
             FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_username(&mut self, username: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT user_id, username, email, password_hash, name, role, created_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
