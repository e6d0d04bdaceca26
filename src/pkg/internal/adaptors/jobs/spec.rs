use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i64,
    pub recruiter_id: i64,
    pub title: String,
    pub description: String,
    pub skills: String,
    /// Salary as entered ("80k-120k USD"); the numeric columns below carry the
    /// parsed range and are what filters run against.
    pub salary: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Narrowing criteria for job listings. Absent fields match everything.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub query: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}
