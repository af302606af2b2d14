use chrono::DateTime;
use chrono_tz::Tz;
use moka::future::Cache;
use rand::Rng;
use std::time::Duration;

use crate::error::AppError;
use crate::model::attendance::Action;
use crate::model::challenge::Challenge;

/// A code is accepted for this long after it was issued.
pub const CODE_TTL_SECS: i64 = 300;

/// Pending verification codes, one per employee.
///
/// Expiry is checked when a code is presented. The cache's own time-to-live
/// only drops entries nobody came back for.
pub struct ChallengeStore {
    entries: Cache<String, Challenge>,
}

impl Default for ChallengeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(3600))
                .build(),
        }
    }

    /// Uniform over 00000..=99999.
    pub fn generate_code() -> String {
        format!("{:05}", rand::thread_rng().gen_range(0..100_000u32))
    }

    /// Issue a fresh code, replacing whatever was pending for `employee`.
    pub async fn issue(&self, employee: &str, action: Action, now: DateTime<Tz>) -> String {
        let code = Self::generate_code();
        self.put(
            employee,
            Challenge {
                code: code.clone(),
                action,
                issued_at: now,
            },
        )
        .await;
        code
    }

    pub async fn put(&self, employee: &str, challenge: Challenge) {
        self.entries.insert(employee.to_string(), challenge).await;
    }

    pub async fn get(&self, employee: &str) -> Option<Challenge> {
        self.entries.get(employee).await
    }

    pub async fn remove(&self, employee: &str) {
        self.entries.invalidate(employee).await;
    }

    /// Check a presented code.
    ///
    /// A wrong code or action leaves the challenge in place for another try.
    /// An expired challenge is removed. On success the challenge is kept; the
    /// caller removes it once the attendance change is committed.
    pub async fn verify(
        &self,
        employee: &str,
        code: &str,
        action: Option<Action>,
        now: DateTime<Tz>,
    ) -> Result<Challenge, AppError> {
        let challenge = self.get(employee).await.ok_or(AppError::NotRequested)?;

        if challenge.code != code {
            return Err(AppError::CodeMismatch);
        }

        if Some(challenge.action) != action {
            return Err(AppError::ActionMismatch);
        }

        if Self::is_expired(&challenge, now) {
            self.remove(employee).await;
            return Err(AppError::Expired);
        }

        Ok(challenge)
    }

    pub fn is_expired(challenge: &Challenge, now: DateTime<Tz>) -> bool {
        (now - challenge.issued_at).num_milliseconds() > CODE_TTL_SECS * 1000
    }
}
