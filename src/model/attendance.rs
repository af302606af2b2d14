use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Status written on every sign-in.
pub const STATUS_PRESENT: &str = "Present";

/// Late-by descriptor for an on-time arrival.
pub const NOT_LATE: &str = "-";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    SignIn,
    SignOut,
}

/// One row of a day's ledger. At most one exists per (name, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub name: String,
    pub date: NaiveDate,
    pub sign_in: Option<NaiveTime>,
    pub sign_out: Option<NaiveTime>,
    pub status: Option<String>,
    /// Either `-` or `<N> min late`
    pub late_by: Option<String>,
    /// `<H>h <M>m`, filled in at sign-out
    pub worked_hours: Option<String>,
}

impl AttendanceRecord {
    pub fn is_signed_in(&self) -> bool {
        self.sign_in.is_some()
    }

    pub fn is_signed_out(&self) -> bool {
        self.sign_out.is_some()
    }

    pub fn is_late(&self) -> bool {
        matches!(self.late_by.as_deref(), Some(v) if v != NOT_LATE)
    }
}
