use crate::{
    api::pages,
    auth::auth::AdminSession,
    error::AppError,
    state::AppState,
    utils::{dashboard::summarize, time_policy::SHIFT_LABEL},
};
use actix_web::{HttpResponse, web};
use tracing::debug;

pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index_page(state.directory.employees()))
}

/// Today's presence, lateness and absence. Only reachable through the admin guard.
pub async fn dashboard(
    session: web::ReqData<AdminSession>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let today = state.clock.now().date_naive();
    let records = state.ledger.for_date(today).await?.records().await?;

    let roster = state.directory.names();
    let summary = summarize(&records, &roster);
    debug!(admin = %session.username, %today, records = records.len(), "Rendering dashboard");

    let page = pages::dashboard_page(
        &today.format("%Y-%m-%d").to_string(),
        SHIFT_LABEL,
        roster.len(),
        &summary,
        &records,
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}
