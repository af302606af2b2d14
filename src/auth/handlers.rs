use crate::{
    api::pages,
    auth::auth::{expired_session_cookie, session_cookie},
    config::Config,
    models::AdminLoginForm,
    state::AppState,
};
use actix_web::{HttpResponse, Responder, http::header, web};
use tracing::{error, info, instrument};

pub async fn admin_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::admin_login_page())
}

#[instrument(
    name = "admin_login",
    skip(state, config, form),
    fields(username = %form.username)
)]
pub async fn admin_login(
    form: web::Form<AdminLoginForm>,
    state: web::Data<AppState>,
    config: web::Data<Config>,
) -> impl Responder {
    if !state.admin.matches(&form.username, &form.password) {
        info!("Invalid credentials");
        return HttpResponse::Unauthorized()
            .content_type("text/plain; charset=utf-8")
            .body("Invalid credentials");
    }

    let cookie = match session_cookie(state.admin.username(), &config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to sign admin session");
            return HttpResponse::InternalServerError().finish();
        }
    };

    info!("Admin logged in");
    HttpResponse::Found()
        .cookie(cookie)
        .insert_header((header::LOCATION, "/dashboard"))
        .finish()
}

pub async fn logout() -> impl Responder {
    HttpResponse::Found()
        .cookie(expired_session_cookie())
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}
