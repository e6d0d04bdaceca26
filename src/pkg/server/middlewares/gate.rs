use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    pkg::internal::auth::{self, Principal, Role},
    prelude::Error,
};

/// The single evaluation point for declared role requirements. Route groups
/// declare the role they need once; this runs after authn, before dispatch.
pub async fn require_role(role: Role, request: Request, next: Next) -> Response {
    match request.extensions().get::<Arc<Principal>>() {
        Some(principal) => match auth::require_role(principal, role) {
            Ok(()) => next.run(request).await,
            Err(e) => e.into_response(),
        },
        None => Error::Unauthenticated.into_response(),
    }
}
