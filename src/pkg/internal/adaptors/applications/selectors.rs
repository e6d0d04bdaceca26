use sqlx::SqliteConnection;

use crate::{
    pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationWithJob},
    prelude::Result,
};

pub struct ApplicationSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        ApplicationSelector { pool }
    }

    pub async fn exists(&mut self, job_id: i64, candidate_id: i64) -> Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM applications WHERE job_id = ? AND candidate_id = ?",
        )
        .bind(job_id)
        .bind(candidate_id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row.is_some())
    }

    pub async fn list_for_job(&mut self, job_id: i64) -> Result<Vec<ApplicationEntry>> {
        let rows = sqlx::query_as::<_, ApplicationEntry>(
            "SELECT id, job_id, candidate_id, candidate_name, candidate_email, cv_message, created_at
             FROM applications WHERE job_id = ?
             ORDER BY created_at DESC, id DESC",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_for_candidate(&mut self, candidate_id: i64) -> Result<Vec<ApplicationWithJob>> {
        let rows = sqlx::query_as::<_, ApplicationWithJob>(
            "SELECT a.id, a.job_id, j.title AS job_title, j.location AS job_location,
                    a.candidate_id, a.candidate_name, a.candidate_email, a.cv_message, a.created_at
             FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE a.candidate_id = ?
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(candidate_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
