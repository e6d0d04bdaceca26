use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::users::mutators::UserMutator,
            auth::{self, Role, Session},
        },
        server::{flash, state::AppState},
    },
    prelude::Result,
};

pub const SESSION_COOKIE: &str = "jp_session";

#[derive(Deserialize)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub async fn signup_form() -> Html<&'static str> {
    Html(
        r#"<form method="post" action="/signup">
  <input name="username" placeholder="username" required>
  <input name="password" type="password" placeholder="password" required>
  <select name="role"><option>recruiter</option><option>candidate</option></select>
  <button type="submit">Sign up</button>
</form>"#,
    )
}

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<SignupInput>,
) -> Result<(CookieJar, Redirect)> {
    let mut conn = state.db_pool.acquire().await?;
    let hashed = auth::hash_password(&input.password)?;
    UserMutator::new(&mut conn)
        .create(&input.username, &hashed, input.role)
        .await?;
    tracing::info!("user {} signed up", &input.username);
    Ok((
        flash::notice(jar, "success", "Account created successfully! Please log in."),
        Redirect::to("/login"),
    ))
}

pub async fn login_form() -> Html<&'static str> {
    Html(
        r#"<form method="post" action="/login">
  <input name="username" placeholder="username" required>
  <input name="password" type="password" placeholder="password" required>
  <button type="submit">Log in</button>
</form>"#,
    )
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<(CookieJar, Redirect)> {
    let mut conn = state.db_pool.acquire().await?;
    let principal = auth::authenticate(&mut conn, &input.username, &input.password).await?;
    let token = Session::issue(&mut conn, principal.user_id).await?;
    tracing::info!("user {} logged in", &principal.username);
    let jar = jar.add(Cookie::build((SESSION_COOKIE, token)).path("/").build());
    Ok((
        flash::notice(jar, "success", "Login successful!"),
        Redirect::to("/dashboard"),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty()) {
        let mut conn = state.db_pool.acquire().await?;
        Session::revoke(&mut conn, cookie.value()).await?;
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((
        flash::notice(jar, "info", "You have been logged out."),
        Redirect::to("/login"),
    ))
}
