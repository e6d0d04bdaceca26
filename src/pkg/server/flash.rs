use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "jp_flash";

/// One-shot "level:message" notice cookie, read by the client after a redirect.
pub fn notice(jar: CookieJar, level: &str, message: &str) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, format!("{level}:{message}")))
            .path("/")
            .build(),
    )
}
