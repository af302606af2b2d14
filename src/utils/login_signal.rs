use std::env;

use crate::error::AppError;

/// Name of the local account the service is answering for.
pub trait LoginSignal: Send + Sync {
    fn username(&self) -> Result<String, AppError>;
}

/// Reads the account name from the environment, the same variables a
/// login shell sets.
pub struct EnvLoginSignal;

const USERNAME_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// First non-blank value among `USERNAME_VARS`, in order.
fn first_username(lookup: impl Fn(&str) -> Option<String>) -> Result<String, AppError> {
    USERNAME_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Internal("no login name in environment".into()))
}

impl LoginSignal for EnvLoginSignal {
    fn username(&self) -> Result<String, AppError> {
        first_username(|key| env::var(key).ok())
    }
}

/// Always reports the same account.
pub struct FixedLoginSignal(pub String);

impl LoginSignal for FixedLoginSignal {
    fn username(&self) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn logname_wins_over_later_variables() {
        let lookup = vars(&[("USERNAME", "winuser"), ("USER", "unixuser"), ("LOGNAME", "shared_pc")]);
        assert_eq!(first_username(lookup).unwrap(), "shared_pc");
    }

    #[test]
    fn blank_variables_are_skipped() {
        let lookup = vars(&[("LOGNAME", "  "), ("LNAME", "user3")]);
        assert_eq!(first_username(lookup).unwrap(), "user3");
    }

    #[test]
    fn no_variables_is_an_internal_error() {
        let err = first_username(vars(&[])).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn fixed_signal_reports_its_name() {
        let signal = FixedLoginSignal("shared_pc".into());
        assert_eq!(signal.username().unwrap(), "shared_pc");
    }
}
