use crate::{state::AppState, utils::identity::resolve_by_login_signal};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{debug, error};

/// Look up the employee behind the local machine account
#[utoipa::path(
    get,
    path = "/get-system-email",
    responses(
        (status = 200, description = "Single employee, shared account, or manual selection", body = Object, example = json!({
            "email": "employee5@example.com",
            "name": "Employee 5"
        })),
        (status = 400, description = "The account name could not be read", body = Object, example = json!({
            "error": "Internal error: no login name in environment"
        }))
    ),
    tag = "Identity"
)]
pub async fn get_system_email(state: web::Data<AppState>) -> impl Responder {
    let username = match state.login_signal.username() {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "Could not determine the system username");
            return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
        }
    };
    debug!(username = %username, "System username detected");

    let resolution = resolve_by_login_signal(&state.directory, &username);
    debug!(?resolution, "Resolved system username");

    HttpResponse::Ok().json(resolution.to_json())
}
