use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationEntry {
    pub id: i64,
    pub job_id: i64,
    pub candidate_id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub cv_message: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Application joined with its job, for the candidate dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithJob {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub job_location: Option<String>,
    pub candidate_id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub cv_message: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
