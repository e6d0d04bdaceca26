use sqlx::SqliteConnection;

use crate::{pkg::internal::adaptors::users::spec::UserEntry, prelude::Result};

pub struct UserSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> UserSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        UserSelector { pool }
    }

    pub async fn get_by_username(&mut self, username: &str) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT id, username, password, role, created_at
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            "SELECT id, username, password, role, created_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
