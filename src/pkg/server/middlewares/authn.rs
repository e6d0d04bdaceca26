use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    pkg::{
        internal::auth::Session,
        server::{handlers::auth::SESSION_COOKIE, state::AppState},
    },
    prelude::{Error, Result},
};

/// Resolves the session cookie to a `Principal` and attaches it to the request.
/// Everything behind this layer can rely on the principal being present.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) else {
        tracing::warn!("session cookie missing, authentication denied");
        return Err(Error::Unauthenticated);
    };
    let mut conn = state.db_pool.acquire().await?;
    let principal = Session::resolve(&mut conn, cookie.value()).await?;
    // release the connection before dispatch; handlers acquire their own
    drop(conn);
    request.extensions_mut().insert(Arc::new(principal));
    Ok(next.run(request).await)
}
