use sqlx::SqliteConnection;

use crate::{
    pkg::internal::{adaptors::users::spec::UserEntry, auth::Role},
    prelude::{Error, Result},
};

pub struct UserMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        UserMutator { pool }
    }

    /// Inserts a new account. Duplicates surface as a unique-constraint
    /// violation rather than a pre-check, so concurrent signups race safely.
    pub async fn create(
        &mut self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<UserEntry> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            RETURNING id, username, password, role, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&mut *self.pool)
        .await;

        match row {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(Error::DuplicateUsername)
            }
            Err(e) => Err(e.into()),
        }
    }
}
