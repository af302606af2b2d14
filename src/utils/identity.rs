use serde_json::{Value, json};

use crate::error::AppError;
use crate::model::employee::{AccountMapping, Directory};

/// Who is sitting at the machine, as far as the account name tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResolution {
    Unique {
        name: String,
        email: String,
    },
    /// The front end must ask which of `users` is signing.
    Shared {
        email: Option<String>,
        users: Vec<String>,
    },
    /// No mapping; the whole roster is offered for manual selection.
    Manual {
        employees: Vec<String>,
        message: String,
    },
}

impl LoginResolution {
    pub fn to_json(&self) -> Value {
        match self {
            LoginResolution::Unique { name, email } => json!({
                "email": email,
                "name": name,
            }),
            LoginResolution::Shared { email, users } => json!({
                "email": email,
                "multiple": true,
                "users": users,
            }),
            LoginResolution::Manual { employees, message } => json!({
                "email": null,
                "multiple": false,
                "employees": employees,
                "message": message,
            }),
        }
    }
}

pub fn resolve_by_login_signal(directory: &Directory, username: &str) -> LoginResolution {
    match directory.account(username) {
        Some(AccountMapping::Single { name, email }) => LoginResolution::Unique {
            name: name.clone(),
            email: email.clone(),
        },
        Some(AccountMapping::Shared { email, users }) => LoginResolution::Shared {
            email: email.clone(),
            users: users.clone(),
        },
        None => LoginResolution::Manual {
            employees: directory.names(),
            message: format!(
                "Employee not found for username: {username}. Please select manually."
            ),
        },
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// An explicitly selected name wins outright, so a shared-account user can
/// say who they are. Otherwise the first employee with this email.
pub fn resolve_by_email_or_explicit_name(
    directory: &Directory,
    email: Option<&str>,
    explicit_name: Option<&str>,
) -> Result<String, AppError> {
    if let Some(name) = non_empty(explicit_name) {
        return Ok(name.to_string());
    }

    let email = non_empty(email).ok_or(AppError::NotFound)?;
    directory
        .employees()
        .iter()
        .find(|e| e.email == email)
        .map(|e| e.name.clone())
        .ok_or(AppError::NotFound)
}

/// Where to send the code: the address the user supplied (a shared
/// account's mailbox, say), else the employee's own.
pub fn delivery_address(
    directory: &Directory,
    employee: &str,
    supplied: Option<&str>,
) -> Option<String> {
    non_empty(supplied)
        .map(str::to_string)
        .or_else(|| directory.email_of(employee).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_account_resolves_to_one_employee() {
        let dir = Directory::builtin();
        assert_eq!(
            resolve_by_login_signal(&dir, "User2"),
            LoginResolution::Unique {
                name: "Employee 5".into(),
                email: "employee5@example.com".into(),
            }
        );
    }

    #[test]
    fn shared_account_lists_candidates() {
        let dir = Directory::builtin();
        let resolution = resolve_by_login_signal(&dir, "shared_pc");
        assert_eq!(
            resolution.to_json(),
            json!({
                "email": null,
                "multiple": true,
                "users": ["Employee 2", "Employee 3", "Employee 4"],
            })
        );
    }

    #[test]
    fn unknown_account_falls_back_to_manual_selection() {
        let dir = Directory::builtin();
        let json = resolve_by_login_signal(&dir, "kiosk").to_json();
        assert_eq!(json["email"], Value::Null);
        assert_eq!(json["multiple"], json!(false));
        assert_eq!(json["employees"].as_array().unwrap().len(), 13);
        assert_eq!(
            json["message"],
            "Employee not found for username: kiosk. Please select manually."
        );
    }

    #[test]
    fn explicit_name_is_trusted() {
        let dir = Directory::builtin();
        let name =
            resolve_by_email_or_explicit_name(&dir, Some("nobody@example.com"), Some("Employee 3"))
                .unwrap();
        assert_eq!(name, "Employee 3");
    }

    #[test]
    fn email_lookup_and_not_found() {
        let dir = Directory::builtin();
        assert_eq!(
            resolve_by_email_or_explicit_name(&dir, Some("employee7@example.com"), Some("")),
            Ok("Employee 7".to_string())
        );
        assert_eq!(
            resolve_by_email_or_explicit_name(&dir, Some("ghost@example.com"), None),
            Err(AppError::NotFound)
        );
        assert_eq!(
            resolve_by_email_or_explicit_name(&dir, None, None),
            Err(AppError::NotFound)
        );
    }

    #[test]
    fn delivery_prefers_the_supplied_address() {
        let dir = Directory::builtin();
        assert_eq!(
            delivery_address(&dir, "Employee 2", Some("frontdesk@example.com")).as_deref(),
            Some("frontdesk@example.com")
        );
        assert_eq!(
            delivery_address(&dir, "Employee 2", None).as_deref(),
            Some("employee2@example.com")
        );
        assert_eq!(delivery_address(&dir, "Stranger", Some(" ")), None);
    }
}
