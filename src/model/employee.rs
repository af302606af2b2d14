use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Employee 5",
    "email": "employee5@example.com"
}))]
pub struct Employee {
    /// Display name, unique across the roster
    #[schema(example = "Employee 5")]
    pub name: String,

    #[schema(example = "employee5@example.com")]
    pub email: String,
}

/// What a local machine account name maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountMapping {
    /// Several employees share the machine; the user must pick one.
    Shared {
        users: Vec<String>,
        #[serde(default)]
        email: Option<String>,
    },
    Single { name: String, email: String },
}

/// Static roster plus the machine-account mapping, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Directory {
    employees: Vec<Employee>,
    // keys are lower-cased
    accounts: HashMap<String, AccountMapping>,
}

#[derive(Deserialize)]
struct DirectoryFile {
    employees: Vec<Employee>,
    #[serde(default)]
    accounts: HashMap<String, AccountMapping>,
}

impl Directory {
    pub fn new(employees: Vec<Employee>, accounts: HashMap<String, AccountMapping>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            employees,
            accounts,
        }
    }

    /// The roster the service ships with: 13 employees, a few personal
    /// machine accounts and one shared workstation.
    pub fn builtin() -> Self {
        let employees = (1..=13)
            .map(|n| Employee {
                name: format!("Employee {n}"),
                email: format!("employee{n}@example.com"),
            })
            .collect();

        let single = |name: &str, email: &str| AccountMapping::Single {
            name: name.to_string(),
            email: email.to_string(),
        };

        let mut accounts = HashMap::new();
        accounts.insert("user1".to_string(), single("Employee 1", "employee1@example.com"));
        accounts.insert(
            "shared_pc".to_string(),
            AccountMapping::Shared {
                users: vec![
                    "Employee 2".to_string(),
                    "Employee 3".to_string(),
                    "Employee 4".to_string(),
                ],
                email: None,
            },
        );
        accounts.insert("user2".to_string(), single("Employee 5", "employee5@example.com"));
        accounts.insert("user3".to_string(), single("Employee 1", "employee1@example.com"));

        Self::new(employees, accounts)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster file {}", path.display()))?;
        let file: DirectoryFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing roster file {}", path.display()))?;

        Ok(Self::new(file.employees, file.accounts))
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn names(&self) -> Vec<String> {
        self.employees.iter().map(|e| e.name.clone()).collect()
    }

    pub fn email_of(&self, name: &str) -> Option<&str> {
        self.employees
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.email.as_str())
    }

    /// Case-insensitive lookup of a machine account name.
    pub fn account(&self, username: &str) -> Option<&AccountMapping> {
        self.accounts.get(&username.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_roster_has_thirteen_employees() {
        let dir = Directory::builtin();
        assert_eq!(dir.employees().len(), 13);
        assert_eq!(dir.email_of("Employee 13"), Some("employee13@example.com"));
        assert_eq!(dir.email_of("Nobody"), None);
    }

    #[test]
    fn account_lookup_ignores_case() {
        let dir = Directory::builtin();
        assert!(matches!(
            dir.account("USER2"),
            Some(AccountMapping::Single { name, .. }) if name == "Employee 5"
        ));
        assert!(matches!(dir.account("Shared_PC"), Some(AccountMapping::Shared { .. })));
    }

    #[test]
    fn loads_roster_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "employees": [
                    {{"name": "Ada", "email": "ada@example.com"}},
                    {{"name": "Grace", "email": "grace@example.com"}}
                ],
                "accounts": {{
                    "ADA-LAPTOP": {{"name": "Ada", "email": "ada@example.com"}},
                    "lab": {{"users": ["Ada", "Grace"], "email": "lab@example.com"}}
                }}
            }}"#
        )
        .unwrap();

        let dir = Directory::from_json_file(file.path()).unwrap();
        assert_eq!(dir.names(), vec!["Ada".to_string(), "Grace".to_string()]);
        assert!(matches!(dir.account("ada-laptop"), Some(AccountMapping::Single { .. })));
        assert_eq!(
            dir.account("lab"),
            Some(&AccountMapping::Shared {
                users: vec!["Ada".into(), "Grace".into()],
                email: Some("lab@example.com".into()),
            })
        );
    }
}
