use sqlx::SqliteConnection;

use crate::{
    pkg::{
        internal::adaptors::applications::{
            selectors::ApplicationSelector, spec::ApplicationEntry,
        },
        server::handlers::applications::ApplyInput,
    },
    prelude::{Error, Result},
};

pub struct ApplicationMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// At most one application per (job, candidate): checked here before the
    /// insert, with the unique index backstopping concurrent duplicates.
    pub async fn create(
        &mut self,
        job_id: i64,
        candidate_id: i64,
        input: &ApplyInput,
    ) -> Result<ApplicationEntry> {
        if ApplicationSelector::new(&mut *self.pool)
            .exists(job_id, candidate_id)
            .await?
        {
            return Err(Error::AlreadyApplied);
        }

        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (job_id, candidate_id, candidate_name, candidate_email, cv_message)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, job_id, candidate_id, candidate_name, candidate_email, cv_message, created_at
            "#,
        )
        .bind(job_id)
        .bind(candidate_id)
        .bind(&input.candidate_name)
        .bind(&input.candidate_email)
        .bind(&input.cv_message)
        .fetch_one(&mut *self.pool)
        .await;

        match row {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(Error::AlreadyApplied),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::pkg::{
        internal::{
            adaptors::{jobs::mutators::JobMutator, users::mutators::UserMutator},
            auth::Role,
        },
        server::handlers::jobs::PostJobInput,
    };

    async fn test_pool() -> sqlx::SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::cmd::migrate::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    fn apply_input() -> ApplyInput {
        ApplyInput {
            candidate_name: "Chris Candidate".into(),
            candidate_email: "chris@example.com".into(),
            cv_message: Some("Please consider my profile".into()),
        }
    }

    #[tokio::test]
    async fn second_application_fails_and_leaves_one_row() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let recruiter = UserMutator::new(&mut conn)
            .create("r1", "hash", Role::Recruiter)
            .await
            .unwrap();
        let candidate = UserMutator::new(&mut conn)
            .create("c1", "hash", Role::Candidate)
            .await
            .unwrap();
        let job = JobMutator::new(&mut conn)
            .create(
                recruiter.id,
                &PostJobInput {
                    title: "Backend Engineer".into(),
                    description: "Build services".into(),
                    skills: "Rust".into(),
                    salary: Some("100k-150k USD".into()),
                    location: Some("Remote".into()),
                    experience: Some("3-5 Years".into()),
                },
            )
            .await
            .unwrap();

        ApplicationMutator::new(&mut conn)
            .create(job.id, candidate.id, &apply_input())
            .await
            .unwrap();

        let err = ApplicationMutator::new(&mut conn)
            .create(job.id, candidate.id, &apply_input())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyApplied));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let rows = ApplicationSelector::new(&mut conn)
            .list_for_job(job.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].candidate_name, "Chris Candidate");
    }

    #[tokio::test]
    async fn candidate_listing_joins_job_fields() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let recruiter = UserMutator::new(&mut conn)
            .create("r1", "hash", Role::Recruiter)
            .await
            .unwrap();
        let candidate = UserMutator::new(&mut conn)
            .create("c1", "hash", Role::Candidate)
            .await
            .unwrap();
        let job = JobMutator::new(&mut conn)
            .create(
                recruiter.id,
                &PostJobInput {
                    title: "Data Scientist".into(),
                    description: "Models".into(),
                    skills: "Python".into(),
                    salary: None,
                    location: Some("Bangalore, India".into()),
                    experience: None,
                },
            )
            .await
            .unwrap();

        ApplicationMutator::new(&mut conn)
            .create(job.id, candidate.id, &apply_input())
            .await
            .unwrap();

        let rows = ApplicationSelector::new(&mut conn)
            .list_for_candidate(candidate.id)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].job_title, "Data Scientist");
        assert_eq!(rows[0].job_location.as_deref(), Some("Bangalore, India"));
    }
}
