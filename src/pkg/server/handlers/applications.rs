use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::mutators::ApplicationMutator, jobs::selectors::JobSelector,
            },
            auth::Principal,
        },
        server::{flash, state::AppState},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct ApplyInput {
    pub candidate_name: String,
    pub candidate_email: String,
    pub cv_message: Option<String>,
}

/// Minimal entity escaping for the one recruiter-supplied value we reflect.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub async fn apply_form(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Html<String>> {
    let mut conn = state.db_pool.acquire().await?;
    let job = JobSelector::new(&mut conn)
        .get_by_id(job_id)
        .await?
        .ok_or(Error::NotFound)?;
    Ok(Html(format!(
        r#"<h1>Apply: {}</h1>
<form method="post" action="/apply_job/{}">
  <input name="candidate_name" placeholder="your name" required>
  <input name="candidate_email" type="email" placeholder="your email" required>
  <textarea name="cv_message" placeholder="cover message"></textarea>
  <button type="submit">Apply</button>
</form>"#,
        escape_html(&job.title),
        job.id
    )))
}

pub async fn apply(
    State(state): State<AppState>,
    Extension(principal): Extension<Arc<Principal>>,
    Path(job_id): Path<i64>,
    jar: CookieJar,
    Form(input): Form<ApplyInput>,
) -> Result<(CookieJar, Redirect)> {
    let mut conn = state.db_pool.acquire().await?;
    JobSelector::new(&mut conn)
        .get_by_id(job_id)
        .await?
        .ok_or(Error::NotFound)?;
    ApplicationMutator::new(&mut conn)
        .create(job_id, principal.user_id, &input)
        .await?;
    tracing::info!("user {} applied to job {}", &principal.username, job_id);
    Ok((
        flash::notice(jar, "success", "Applied to job successfully!"),
        Redirect::to("/dashboard"),
    ))
}
