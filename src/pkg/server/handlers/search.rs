use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            selectors::JobSelector,
            spec::{JobEntry, JobFilter},
        },
        server::state::AppState,
    },
    prelude::Result,
};

/// Raw query params. Numeric bounds arrive as text and are parsed leniently:
/// anything non-numeric is treated as absent, never rejected.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub min_salary: Option<String>,
    pub max_salary: Option<String>,
}

impl SearchParams {
    pub fn into_filter(self) -> JobFilter {
        JobFilter {
            query: none_if_blank(self.query),
            location: none_if_blank(self.location),
            experience: none_if_blank(self.experience),
            min_salary: self.min_salary.and_then(|s| s.trim().parse().ok()),
            max_salary: self.max_salary.and_then(|s| s.trim().parse().ok()),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_owned();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub async fn jobs_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JobEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn)
        .search(&params.into_filter())
        .await?;
    Ok(Json(jobs))
}
