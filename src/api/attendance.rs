use crate::{
    error::AppError,
    model::attendance::{Action, AttendanceRecord},
    models::{RequestCodeForm, VerifyForm},
    state::AppState,
    utils::{
        identity::{delivery_address, resolve_by_email_or_explicit_name},
        time_policy::{late_by_descriptor, within_shift},
    },
};
use actix_web::{HttpResponse, ResponseError, http::header, web};
use serde_json::json;
use tracing::{info, warn};

/// Issue a code for `form` and mail it. Returns the address it went to.
pub async fn issue_code(state: &AppState, form: &RequestCodeForm) -> Result<String, AppError> {
    let employee = resolve_by_email_or_explicit_name(
        &state.directory,
        form.email.as_deref(),
        form.selected_name.as_deref(),
    )?;

    let action: Action = form
        .action
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::InvalidAction)?;

    // a picked name outside the roster has nowhere to send the code
    let address = delivery_address(&state.directory, &employee, form.email.as_deref())
        .ok_or(AppError::NotFound)?;

    let code = state
        .challenges
        .issue(&employee, action, state.clock.now())
        .await;

    let subject = format!("{} Verification Code", action.as_ref().to_uppercase());
    if let Err(e) = state
        .notifier
        .send(&address, &subject, &format!("Your code is: {code}"))
    {
        // nobody can ever present it
        state.challenges.remove(&employee).await;
        return Err(e);
    }

    info!(employee = %employee, action = %action, to = %address, "Verification code issued");
    Ok(address)
}

/// Check the presented code and apply the attendance change it confirms.
pub async fn submit(state: &AppState, form: &VerifyForm) -> Result<AttendanceRecord, AppError> {
    let employee = resolve_by_email_or_explicit_name(
        &state.directory,
        form.email.as_deref(),
        form.selected_name.as_deref(),
    )?;
    let action = form.action.as_deref().and_then(|a| a.parse::<Action>().ok());
    let code = form.code.as_deref().unwrap_or_default().trim();

    let _guard = state.lock_submissions().await;
    let now = state.clock.now();

    let challenge = state
        .challenges
        .verify(&employee, code, action, now)
        .await?;

    let date = now.date_naive();
    let time = now.time();
    let ledger = state.ledger.for_date(date).await?;

    let outcome = match challenge.action {
        Action::SignIn => {
            if !within_shift(time) {
                warn!(employee = %employee, %time, "Sign-in outside the night shift");
            }
            let late_by = late_by_descriptor(time);
            ledger.record_sign_in(&employee, date, time, &late_by).await
        }
        Action::SignOut => ledger.record_sign_out(&employee, date, time).await,
    };

    // a storage failure leaves the code usable for a retry; anything else consumes it
    if !matches!(outcome, Err(AppError::Internal(_))) {
        state.challenges.remove(&employee).await;
    }

    match &outcome {
        Ok(record) => info!(
            employee = %employee,
            action = %challenge.action,
            late_by = ?record.late_by,
            worked_hours = ?record.worked_hours,
            "Attendance updated"
        ),
        Err(e) => warn!(employee = %employee, action = %challenge.action, error = %e, "Attendance rejected"),
    }

    outcome
}

/// Request a verification code
#[utoipa::path(
    post,
    path = "/request-code",
    request_body(
        content = RequestCodeForm,
        description = "Who is asking and for which action",
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Code issued and mailed", body = Object, example = json!({
            "status": "success",
            "message": "Verification code sent to employee5@example.com"
        })),
        (status = 400, description = "Unknown employee or invalid action", body = Object, example = json!({
            "status": "error",
            "message": "Employee not found in our system"
        })),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn request_code(
    state: web::Data<AppState>,
    form: web::Form<RequestCodeForm>,
) -> HttpResponse {
    match issue_code(&state, &form).await {
        Ok(address) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": format!("Verification code sent to {address}")
        })),
        Err(e) => HttpResponse::build(e.status_code()).json(json!({
            "status": "error",
            "message": e.public_message()
        })),
    }
}

/// Verify a code and record the sign-in or sign-out
#[utoipa::path(
    post,
    path = "/verify-and-submit",
    request_body(
        content = VerifyForm,
        description = "The code from the email plus the action it was issued for",
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 302, description = "Recorded; redirects to the form"),
        (status = 400, description = "Rejected, with a plain-text reason", body = String, example = json!("Invalid verification code")),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn verify_and_submit(
    state: web::Data<AppState>,
    form: web::Form<VerifyForm>,
) -> Result<HttpResponse, AppError> {
    submit(&state, &form).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}
