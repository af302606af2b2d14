use crate::model::attendance::Action;
use crate::model::employee::Employee;
use crate::models::{RequestCodeForm, VerifyForm};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "1.0.0",
        description = r#"
## Night-shift attendance

Employees sign in and out from a shared web form. Each action is confirmed
with a five-digit code mailed to the employee, valid for five minutes.
The shift runs 6:00 PM - 3:00 AM (America/New_York); sign-ins after 6:00 PM
are recorded as late.

Administrators log in at `/admin` to see who is present, late or absent today.
"#,
    ),
    paths(
        crate::api::identity::get_system_email,
        crate::api::attendance::request_code,
        crate::api::attendance::verify_and_submit
    ),
    components(schemas(RequestCodeForm, VerifyForm, Employee, Action)),
    tags(
        (name = "Identity", description = "Who is at the keyboard"),
        (name = "Attendance", description = "Code challenge and sign-in/out"),
    )
)]
pub struct ApiDoc;
