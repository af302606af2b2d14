use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestCodeForm {
    /// Address to deliver the code to; for a shared account, its mailbox
    #[schema(example = "employee5@example.com", format = "email")]
    pub email: Option<String>,
    /// `sign_in` or `sign_out`
    #[schema(example = "sign_in")]
    pub action: Option<String>,
    /// Set when the user picked their name (shared account or manual selection)
    #[schema(example = "Employee 5")]
    pub selected_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyForm {
    #[schema(example = "employee5@example.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "04821")]
    pub code: Option<String>,
    #[schema(example = "sign_in")]
    pub action: Option<String>,
    #[schema(example = "Employee 5")]
    pub selected_name: Option<String>,
}

#[derive(Deserialize)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
    pub jti: String,
}
