use sqlx::SqliteConnection;

use crate::{
    pkg::internal::adaptors::jobs::spec::{JobEntry, JobFilter},
    prelude::Result,
};

const COLUMNS: &str = "id, recruiter_id, title, description, skills, salary, \
                       salary_min, salary_max, salary_currency, location, experience, created_at";

pub struct JobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {COLUMNS} FROM jobs WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_for_recruiter(&mut self, recruiter_id: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(&format!(
            "SELECT {COLUMNS} FROM jobs WHERE recruiter_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(recruiter_id)
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    /// Listing with optional narrowing, newest first. Substring matches are
    /// case-insensitive; salary bounds run against the parsed numeric range and
    /// skip jobs whose salary text never parsed.
    pub async fn search(&mut self, filter: &JobFilter) -> Result<Vec<JobEntry>> {
        let mut sql = format!("SELECT {COLUMNS} FROM jobs WHERE 1=1");
        if filter.query.is_some() {
            sql.push_str(" AND (title LIKE ? OR skills LIKE ? OR description LIKE ?)");
        }
        if filter.location.is_some() {
            sql.push_str(" AND location LIKE ?");
        }
        if filter.experience.is_some() {
            sql.push_str(" AND experience LIKE ?");
        }
        if filter.min_salary.is_some() {
            sql.push_str(" AND salary_min IS NOT NULL AND COALESCE(salary_max, salary_min) >= ?");
        }
        if filter.max_salary.is_some() {
            sql.push_str(" AND salary_min IS NOT NULL AND salary_min <= ?");
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut q = sqlx::query_as::<_, JobEntry>(&sql);
        if let Some(query) = &filter.query {
            let pattern = format!("%{query}%");
            q = q.bind(pattern.clone()).bind(pattern.clone()).bind(pattern);
        }
        if let Some(location) = &filter.location {
            q = q.bind(format!("%{location}%"));
        }
        if let Some(experience) = &filter.experience {
            q = q.bind(format!("%{experience}%"));
        }
        if let Some(min) = filter.min_salary {
            q = q.bind(min);
        }
        if let Some(max) = filter.max_salary {
            q = q.bind(max);
        }

        let rows = q.fetch_all(&mut *self.pool).await?;
        Ok(rows)
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

    fn job(title: &str, skills: &str, salary: Option<&str>, location: &str, exp: &str) -> PostJobInput {
        PostJobInput {
            title: title.into(),
            description: format!("{title} role"),
            skills: skills.into(),
            salary: salary.map(Into::into),
            location: Some(location.into()),
            experience: Some(exp.into()),
        }
    }

    async fn seed(pool: &sqlx::SqlitePool) -> i64 {
        let mut conn = pool.acquire().await.unwrap();
        let recruiter = UserMutator::new(&mut conn)
            .create("r1", "hash", Role::Recruiter)
            .await
            .unwrap();
        let mut mutator = JobMutator::new(&mut conn);
        mutator
            .create(
                recruiter.id,
                &job(
                    "FPGA Design Engineer",
                    "VHDL, Verilog, FPGA",
                    Some("90k-130k USD"),
                    "Hyderabad, India",
                    "5-8 Years",
                ),
            )
            .await
            .unwrap();
        mutator
            .create(
                recruiter.id,
                &job(
                    "AI/ML Engineer",
                    "Python, TensorFlow",
                    Some("100k-150k USD"),
                    "Bangalore, India",
                    "4-7 Years",
                ),
            )
            .await
            .unwrap();
        mutator
            .create(
                recruiter.id,
                &job(
                    "UX Designer",
                    "Figma, Sketch",
                    Some("competitive"),
                    "Mumbai, India",
                    "3-5 Years",
                ),
            )
            .await
            .unwrap();
        recruiter.id
    }

    #[tokio::test]
    async fn query_matches_substring_case_insensitively_newest_first() {
        let pool = test_pool().await;
        seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let filter = JobFilter {
            query: Some("engineer".into()),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["AI/ML Engineer", "FPGA Design Engineer"]);
    }

    #[tokio::test]
    async fn location_and_experience_narrow_results() {
        let pool = test_pool().await;
        seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let filter = JobFilter {
            location: Some("bangalore".into()),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "AI/ML Engineer");

        let filter = JobFilter {
            experience: Some("5-8".into()),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "FPGA Design Engineer");
    }

    #[tokio::test]
    async fn salary_bounds_use_parsed_range_and_skip_unparsed() {
        let pool = test_pool().await;
        seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        // min bound: FPGA tops out at 130k, AI/ML at 150k; "competitive" never parsed
        let filter = JobFilter {
            min_salary: Some(140_000),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "AI/ML Engineer");

        let filter = JobFilter {
            max_salary: Some(95_000),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "FPGA Design Engineer");

        // any salary bound excludes jobs without a parsed range
        let filter = JobFilter {
            min_salary: Some(0),
            ..Default::default()
        };
        let rows = JobSelector::new(&mut conn).search(&filter).await.unwrap();
        assert!(rows.iter().all(|j| j.title != "UX Designer"));
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn ownership_listing_only_returns_own_jobs() {
        let pool = test_pool().await;
        let r1 = seed(&pool).await;
        let mut conn = pool.acquire().await.unwrap();

        let r2 = UserMutator::new(&mut conn)
            .create("r2", "hash", Role::Recruiter)
            .await
            .unwrap();
        let rows = JobSelector::new(&mut conn)
            .get_for_recruiter(r2.id)
            .await
            .unwrap();
        assert!(rows.is_empty());

        let rows = JobSelector::new(&mut conn)
            .get_for_recruiter(r1)
            .await
            .unwrap();
        assert_eq!(rows.len(), 3);
    }
}
