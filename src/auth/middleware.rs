use crate::auth::auth::AdminSession;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
};

/// Lets requests with a valid admin session through; sends everyone else
/// to the login form.
pub async fn admin_guard(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let Some(session) = AdminSession::from_http_request(req.request()) else {
        let resp = HttpResponse::Found()
            .insert_header((header::LOCATION, "/admin"))
            .finish();
        return Ok(req.into_response(resp));
    };

    req.extensions_mut().insert(session);

    next.call(req).await
}
