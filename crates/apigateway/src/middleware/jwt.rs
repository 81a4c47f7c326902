use axum::{
    extract::{Extension, Request},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use shared::{
    abstract_trait::jwt::DynJwtService,
    errors::{AppErrorHttp, ServiceError},
};
use tracing::{debug, warn};

/// Session cookies set by the web front end, checked in this order.
pub const SESSION_COOKIES: [&str; 2] = [
    "__Secure-next-auth.session-token",
    "next-auth.session-token",
];

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn session_cookie(jar: &CookieJar) -> Option<String> {
    SESSION_COOKIES
        .iter()
        .filter_map(|name| jar.get(name))
        .map(|cookie| cookie.value().trim().to_string())
        .find(|value| !value.is_empty())
}

/// Resolves the caller from the session token and stores the numeric user id
/// as an `Extension<i32>` for the handlers behind it.
pub async fn auth(
    Extension(jwt): Extension<DynJwtService>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppErrorHttp> {
    let Some(token) = bearer_token(req.headers()).or_else(|| session_cookie(&jar)) else {
        warn!("🔐 Request without session token: {}", req.uri().path());
        return Err(ServiceError::Unauthorized(None).into());
    };

    let user_id = jwt.verify_token(&token)?;

    debug!("🎫 Session token resolved to user {user_id}");

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn reads_bearer_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn ignores_other_schemes_and_blank_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn secure_cookie_wins_over_plain_cookie() {
        let jar = CookieJar::new()
            .add(Cookie::new("next-auth.session-token", "plain"))
            .add(Cookie::new("__Secure-next-auth.session-token", "secure"));

        assert_eq!(session_cookie(&jar).as_deref(), Some("secure"));
    }
}
