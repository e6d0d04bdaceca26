use std::sync::Arc;

use axum::{extract::State, response::Html, Extension, Json};
use serde_json::{json, Value};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::selectors::ApplicationSelector, jobs::selectors::JobSelector,
            },
            auth::{Principal, Role},
        },
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn home() -> Html<&'static str> {
    Html(
        r#"<h1>Job Portal</h1>
<p><a href="/signup">Sign up</a> | <a href="/login">Log in</a> | <a href="/jobs">Browse jobs</a></p>"#,
    )
}

/// Role-branching dashboard: recruiters see their postings, candidates their
/// applications.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(principal): Extension<Arc<Principal>>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let body = match principal.role {
        Role::Recruiter => {
            let jobs = JobSelector::new(&mut conn)
                .get_for_recruiter(principal.user_id)
                .await?;
            json!({"username": principal.username, "role": principal.role, "jobs": jobs})
        }
        Role::Candidate => {
            let applications = ApplicationSelector::new(&mut conn)
                .list_for_candidate(principal.user_id)
                .await?;
            json!({"username": principal.username, "role": principal.role, "applications": applications})
        }
    };
    Ok(Json(body))
}
