use sqlx::SqliteConnection;

use crate::{
    pkg::{
        internal::{adaptors::jobs::spec::JobEntry, salary::SalaryRange},
        server::handlers::jobs::PostJobInput,
    },
    prelude::Result,
};

pub struct JobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobMutator { pool }
    }

    /// Inserts a job owned by `recruiter_id`. Salary text is parsed here so the
    /// numeric range columns stay in lockstep with what was entered.
    pub async fn create(&mut self, recruiter_id: i64, input: &PostJobInput) -> Result<JobEntry> {
        let parsed = input.salary.as_deref().and_then(SalaryRange::parse);
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (recruiter_id, title, description, skills, salary,
                              salary_min, salary_max, salary_currency, location, experience)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, recruiter_id, title, description, skills, salary,
                      salary_min, salary_max, salary_currency, location, experience, created_at
            "#,
        )
        .bind(recruiter_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.skills)
        .bind(&input.salary)
        .bind(parsed.as_ref().map(|s| s.min))
        .bind(parsed.as_ref().and_then(|s| s.max))
        .bind(parsed.as_ref().and_then(|s| s.currency.clone()))
        .bind(&input.location)
        .bind(&input.experience)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
