use axum::{
    extract::Request,
    middleware::{from_fn, from_fn_with_state, Next},
    routing::get,
    Router,
};

use super::handlers::{applications, auth, jobs, probes, search, ui};
use super::middlewares::{authn, gate};
use super::state::AppState;
use crate::pkg::internal::auth::Role;

pub fn build_routes(state: AppState) -> Router {
    let recruiter = Router::new()
        .route("/post_job", get(jobs::post_job_form).post(jobs::post_job))
        .route("/view_applications/{job_id}", get(jobs::view_applications))
        .route_layer(from_fn(|request: Request, next: Next| {
            gate::require_role(Role::Recruiter, request, next)
        }));

    let candidate = Router::new()
        .route(
            "/apply_job/{job_id}",
            get(applications::apply_form).post(applications::apply),
        )
        .route_layer(from_fn(|request: Request, next: Next| {
            gate::require_role(Role::Candidate, request, next)
        }));

    let protected = Router::new()
        .route("/jobs", get(jobs::list))
        .route("/dashboard", get(ui::dashboard))
        .merge(recruiter)
        .merge(candidate)
        .layer(from_fn_with_state(state.clone(), authn::authenticate));

    Router::new()
        .merge(protected)
        .route("/", get(ui::home))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/api/jobs_search", get(search::jobs_search))
        .route("/healthz", get(probes::healthz))
        .route("/livez", get(probes::livez))
        .with_state(state)
}
