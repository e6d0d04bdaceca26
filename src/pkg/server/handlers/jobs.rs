use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Extension, Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::{selectors::ApplicationSelector, spec::ApplicationEntry},
                jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
            },
            auth::{self, Principal},
        },
        server::{flash, handlers::search::SearchParams, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct PostJobInput {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
}

/// Authenticated job browsing; accepts the same narrowing params as the
/// search API.
pub async fn list(
    State(state): State<AppState>,
    Extension(_principal): Extension<Arc<Principal>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JobEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let jobs = JobSelector::new(&mut conn)
        .search(&params.into_filter())
        .await?;
    Ok(Json(jobs))
}

pub async fn post_job_form() -> Html<&'static str> {
    Html(
        r#"<form method="post" action="/post_job">
  <input name="title" placeholder="title" required>
  <textarea name="description" placeholder="description" required></textarea>
  <input name="skills" placeholder="skills" required>
  <input name="salary" placeholder="salary, e.g. 80k-120k USD">
  <input name="location" placeholder="location">
  <input name="experience" placeholder="experience, e.g. 3-5 Years">
  <button type="submit">Post job</button>
</form>"#,
    )
}

pub async fn post_job(
    State(state): State<AppState>,
    Extension(principal): Extension<Arc<Principal>>,
    jar: CookieJar,
    Form(input): Form<PostJobInput>,
) -> Result<(CookieJar, Redirect)> {
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut conn)
        .create(principal.user_id, &input)
        .await?;
    tracing::info!("job {} posted by {}", job.id, &principal.username);
    Ok((
        flash::notice(jar, "success", "Job posted successfully!"),
        Redirect::to("/dashboard"),
    ))
}

/// Applications for one job; only the owning recruiter may see them.
pub async fn view_applications(
    State(state): State<AppState>,
    Extension(principal): Extension<Arc<Principal>>,
    Path(job_id): Path<i64>,
) -> Result<Json<Vec<ApplicationEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let job = JobSelector::new(&mut conn)
        .get_by_id(job_id)
        .await?
        .ok_or(Error::NotFound)?;
    auth::require_owner(&principal, &job)?;
    let applications = ApplicationSelector::new(&mut conn).list_for_job(job_id).await?;
    Ok(Json(applications))
}
