use serde::Serialize;
use sqlx::FromRow;

use crate::pkg::internal::auth::Role;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserEntry {
    pub id: i64,
    pub username: String,
    /// bcrypt hash, never the plaintext. Kept out of serialized output.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub created_at: chrono::NaiveDateTime,
}
