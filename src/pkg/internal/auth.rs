use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::{jobs::spec::JobEntry, users::selectors::UserSelector},
    prelude::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Recruiter,
    Candidate,
}

/// The authenticated identity attached to a request. Built once per request by
/// the authn middleware and carried in request extensions; nothing reads
/// ambient session state.
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

pub fn hash_password(password: &str) -> Result<String> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub async fn authenticate(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<Principal> {
    let Some(user) = UserSelector::new(conn).get_by_username(username).await? else {
        return Err(Error::InvalidCredentials);
    };
    if !verify(password, &user.password)? {
        return Err(Error::InvalidCredentials);
    }
    Ok(Principal {
        user_id: user.id,
        username: user.username,
        role: user.role,
    })
}

/// Role gate; evaluated once before dispatch for routes that declare a role.
pub fn require_role(principal: &Principal, role: Role) -> Result<()> {
    if principal.role == role {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

/// Resource authorization: only the owning recruiter may act on a job.
pub fn require_owner(principal: &Principal, job: &JobEntry) -> Result<()> {
    if job.recruiter_id == principal.user_id {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

/// Server-side session rows behind the session cookie. The cookie carries only
/// the opaque token; everything else lives in the `sessions` table.
pub struct Session;

impl Session {
    pub async fn issue(conn: &mut SqliteConnection, user_id: i64) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO sessions (token, user_id) VALUES (?, ?)")
            .bind(&token)
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(token)
    }

    pub async fn resolve(conn: &mut SqliteConnection, token: &str) -> Result<Principal> {
        let row = sqlx::query_as::<_, (i64, String, Role)>(
            "SELECT u.id, u.username, u.role
             FROM sessions s JOIN users u ON u.id = s.user_id
             WHERE s.token = ?",
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await?;
        row.map(|(user_id, username, role)| Principal {
            user_id,
            username,
            role,
        })
        .ok_or(Error::Unauthenticated)
    }

    pub async fn revoke(conn: &mut SqliteConnection, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::pkg::internal::adaptors::users::mutators::UserMutator;

    async fn test_pool() -> sqlx::SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::cmd::migrate::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn signup_then_authenticate_roundtrip() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let hashed = hash_password("password123").unwrap();
        let user = UserMutator::new(&mut conn)
            .create("recruiter1", &hashed, Role::Recruiter)
            .await
            .unwrap();
        assert_eq!(user.username, "recruiter1");
        assert_ne!(user.password, "password123");

        let principal = authenticate(&mut conn, "recruiter1", "password123")
            .await
            .unwrap();
        assert_eq!(principal.user_id, user.id);
        assert_eq!(principal.role, Role::Recruiter);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let hashed = hash_password("password123").unwrap();
        UserMutator::new(&mut conn)
            .create("candidate1", &hashed, Role::Candidate)
            .await
            .unwrap();

        let err = authenticate(&mut conn, "candidate1", "password124")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));

        let err = authenticate(&mut conn, "nobody", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn duplicate_username_leaves_existing_row_unchanged() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let hashed = hash_password("first").unwrap();
        UserMutator::new(&mut conn)
            .create("taken", &hashed, Role::Recruiter)
            .await
            .unwrap();

        let other = hash_password("second").unwrap();
        let err = UserMutator::new(&mut conn)
            .create("taken", &other, Role::Candidate)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateUsername));

        // original credentials still authenticate
        let principal = authenticate(&mut conn, "taken", "first").await.unwrap();
        assert_eq!(principal.role, Role::Recruiter);
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let hashed = hash_password("pw").unwrap();
        let user = UserMutator::new(&mut conn)
            .create("c1", &hashed, Role::Candidate)
            .await
            .unwrap();

        let token = Session::issue(&mut conn, user.id).await.unwrap();
        let principal = Session::resolve(&mut conn, &token).await.unwrap();
        assert_eq!(principal.username, "c1");

        Session::revoke(&mut conn, &token).await.unwrap();
        let err = Session::resolve(&mut conn, &token).await.unwrap_err();
        assert!(matches!(err, Error::Unauthenticated));

        let err = Session::resolve(&mut conn, "not-a-token").await.unwrap_err();
        assert!(matches!(err, Error::Unauthenticated));
    }
}
