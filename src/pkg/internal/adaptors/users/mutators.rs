use chrono::Utc;
use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::users::spec::{Role, UserEntry};
use crate::prelude::{Error, Result};

pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

pub struct UserMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        UserMutator { pool }
    }

    pub async fn create(&mut self, data: CreateUserData) -> Result<UserEntry> {
        let result = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (user_id, username, email, password_hash, name, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING user_id, username, email, password_hash, name, role, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.name)
        .bind(data.role)
        .bind(Utc::now())
        .fetch_one(&mut *self.pool)
        .await;
        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::Conflict("User already exists"))
            }
            Err(err) => Err(err.into()),
        }
    }
}
