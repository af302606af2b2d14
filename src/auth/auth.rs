use crate::auth::jwt::{generate_session_token, verify_token};
use crate::config::Config;
use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::web::Data;

pub const SESSION_COOKIE: &str = "admin_session";

/// An administrator who presented a valid session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

impl AdminSession {
    /// Reads and checks the session cookie. `None` when absent, forged or expired.
    pub fn from_http_request(req: &HttpRequest) -> Option<Self> {
        let config = req.app_data::<Data<Config>>()?;
        let cookie = req.cookie(SESSION_COOKIE)?;

        match verify_token(cookie.value(), &config.secret_key) {
            Ok(claims) => Some(AdminSession {
                username: claims.sub,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected admin session cookie");
                None
            }
        }
    }
}

pub fn session_cookie(
    username: &str,
    config: &Config,
) -> Result<Cookie<'static>, jsonwebtoken::errors::Error> {
    let token = generate_session_token(username, &config.secret_key, config.session_ttl)?;

    Ok(Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.session_ttl as i64))
        .finish())
}

pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
