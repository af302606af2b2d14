use chrono::DateTime;
use chrono_tz::Tz;

use crate::model::attendance::Action;

/// A one-time code waiting to confirm an attendance action.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    /// Five decimal digits, leading zeros allowed
    pub code: String,
    pub action: Action,
    pub issued_at: DateTime<Tz>,
}
