use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use thiserror::Error;

use crate::pkg::server::flash;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Username already exists. Please choose another.")]
    DuplicateUsername,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("You need to login first.")]
    Unauthenticated,
    #[error("You are not authorized to access this page.")]
    Forbidden,
    #[error("Job not found")]
    NotFound,
    #[error("You have already applied to this job.")]
    AlreadyApplied,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Route-boundary recovery: where to send the user, and with what notice level.
    /// Infra errors have no recovery and surface as 500s.
    fn recovery(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Error::DuplicateUsername => Some(("/signup", "danger")),
            Error::InvalidCredentials => Some(("/login", "danger")),
            Error::Unauthenticated => Some(("/login", "danger")),
            Error::Forbidden => Some(("/dashboard", "danger")),
            Error::NotFound => Some(("/jobs", "danger")),
            Error::AlreadyApplied => Some(("/jobs", "warning")),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.recovery() {
            Some((target, level)) => {
                let jar = flash::notice(CookieJar::default(), level, &self.to_string());
                (jar, Redirect::to(target)).into_response()
            }
            None => {
                tracing::error!("request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal server error"})),
                )
                    .into_response()
            }
        }
    }
}
