use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// Signs the admin session cookie
    pub secret_key: String,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl: usize,

    pub db_dir: PathBuf,
    pub log_dir: PathBuf,
    pub roster_file: Option<PathBuf>,
    /// Pins the machine account name instead of reading it from the environment
    pub login_name: Option<String>,

    // Rate limiting
    pub rate_request_code_per_min: u32,
    pub rate_admin_login_per_min: u32,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: var_or("SERVER_ADDR", "0.0.0.0:5000"),
            secret_key: var_or("SECRET_KEY", "supersecretkey"),
            admin_username: var_or("ADMIN_USERNAME", "admin"),
            admin_password: var_or("ADMIN_PASSWORD", "billing@787"),
            session_ttl: parsed_or("SESSION_TTL", 28_800), // default 8h

            db_dir: PathBuf::from(var_or("DB_DIR", "db")),
            log_dir: PathBuf::from(var_or("LOG_DIR", "logs")),
            roster_file: env::var("ROSTER_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            login_name: env::var("LOGIN_NAME").ok().filter(|v| !v.trim().is_empty()),

            rate_request_code_per_min: parsed_or("RATE_REQUEST_CODE_PER_MIN", 10),
            rate_admin_login_per_min: parsed_or("RATE_ADMIN_LOGIN_PER_MIN", 20),
        }
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for in-process tests, storing data under `db_dir`.
    pub fn for_tests(db_dir: impl Into<PathBuf>) -> Self {
        Self {
            server_addr: "127.0.0.1:0".into(),
            secret_key: "test-secret".into(),
            admin_username: "admin".into(),
            admin_password: "letmein".into(),
            session_ttl: 3600,
            db_dir: db_dir.into(),
            log_dir: PathBuf::from("logs"),
            roster_file: None,
            login_name: None,
            rate_request_code_per_min: 1000,
            rate_admin_login_per_min: 1000,
        }
    }
}
