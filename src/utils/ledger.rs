use chrono::{NaiveDate, NaiveTime, Timelike};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::AppError;
use crate::model::attendance::{AttendanceRecord, STATUS_PRESENT};
use crate::utils::time_policy;

const SELECT_COLUMNS: &str =
    "SELECT name, date, sign_in, sign_out, status, late_by, worked_hours FROM attendance";

/// Attendance rows for one calendar day.
#[derive(Clone)]
pub struct Ledger {
    pool: SqlitePool,
}

fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

impl Ledger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_record(
        &self,
        employee: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, AppError> {
        let sql = format!("{SELECT_COLUMNS} WHERE name = ? AND date = ?");
        let record = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(employee)
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Every row in the day file, oldest first.
    pub async fn records(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let rows = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn record_sign_in(
        &self,
        employee: &str,
        date: NaiveDate,
        time: NaiveTime,
        late_by: &str,
    ) -> Result<AttendanceRecord, AppError> {
        let time = whole_seconds(time);

        // an existing row without a sign-in is filled in; one with a sign-in is left alone
        let result = sqlx::query(
            r#"
            INSERT INTO attendance (name, date, sign_in, status, late_by)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (name, date) DO UPDATE
                SET sign_in = excluded.sign_in,
                    status = excluded.status,
                    late_by = excluded.late_by
                WHERE attendance.sign_in IS NULL
            "#,
        )
        .bind(employee)
        .bind(date)
        .bind(time)
        .bind(STATUS_PRESENT)
        .bind(late_by)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AlreadySignedIn);
        }

        debug!(employee, %date, %time, late_by, "Sign-in recorded");
        self.get_record(employee, date)
            .await?
            .ok_or_else(|| AppError::Internal("sign-in row vanished".into()))
    }

    pub async fn record_sign_out(
        &self,
        employee: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<AttendanceRecord, AppError> {
        let time = whole_seconds(time);

        let record = self.get_record(employee, date).await?;
        let sign_in = record
            .as_ref()
            .and_then(|r| r.sign_in)
            .ok_or(AppError::NotSignedIn)?;

        if record.as_ref().is_some_and(AttendanceRecord::is_signed_out) {
            return Err(AppError::AlreadySignedOut);
        }

        let worked = time_policy::worked_hours(sign_in, time);

        let result = sqlx::query(
            r#"
            UPDATE attendance
            SET sign_out = ?, worked_hours = ?
            WHERE name = ?
            AND date = ?
            AND sign_out IS NULL
            "#,
        )
        .bind(time)
        .bind(&worked)
        .bind(employee)
        .bind(date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AlreadySignedOut);
        }

        debug!(employee, %date, %time, worked = %worked, "Sign-out recorded");
        self.get_record(employee, date)
            .await?
            .ok_or_else(|| AppError::Internal("sign-out row vanished".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    async fn ledger(dir: &tempfile::TempDir) -> Ledger {
        Ledger::new(init_db(&dir.path().join("day.db")).await.unwrap())
    }

    #[actix_web::test]
    async fn sign_in_creates_a_present_record() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        let record = ledger
            .record_sign_in("Employee 5", day(), t(18, 15, 0), "15 min late")
            .await
            .unwrap();

        assert_eq!(record.sign_in, Some(t(18, 15, 0)));
        assert_eq!(record.sign_out, None);
        assert_eq!(record.status.as_deref(), Some("Present"));
        assert_eq!(record.late_by.as_deref(), Some("15 min late"));
        assert_eq!(ledger.get_record("Employee 5", day()).await.unwrap(), Some(record));
    }

    #[actix_web::test]
    async fn second_sign_in_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        ledger
            .record_sign_in("Employee 1", day(), t(17, 55, 0), "-")
            .await
            .unwrap();
        let err = ledger
            .record_sign_in("Employee 1", day(), t(18, 30, 0), "30 min late")
            .await
            .unwrap_err();
        assert_eq!(err, AppError::AlreadySignedIn);

        let record = ledger.get_record("Employee 1", day()).await.unwrap().unwrap();
        assert_eq!(record.sign_in, Some(t(17, 55, 0)));
        assert_eq!(record.late_by.as_deref(), Some("-"));
    }

    #[actix_web::test]
    async fn sign_out_requires_a_sign_in() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        let err = ledger
            .record_sign_out("Employee 2", day(), t(23, 0, 0))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::NotSignedIn);
        assert_eq!(ledger.get_record("Employee 2", day()).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn sign_out_records_worked_hours_once() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        ledger
            .record_sign_in("Employee 5", day(), t(18, 15, 0), "15 min late")
            .await
            .unwrap();
        let record = ledger
            .record_sign_out("Employee 5", day(), t(18, 47, 0))
            .await
            .unwrap();
        assert_eq!(record.sign_out, Some(t(18, 47, 0)));
        assert_eq!(record.worked_hours.as_deref(), Some("0h 32m"));

        let err = ledger
            .record_sign_out("Employee 5", day(), t(19, 0, 0))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::AlreadySignedOut);
    }

    #[actix_web::test]
    async fn times_are_stored_to_the_second() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        let precise = NaiveTime::from_hms_milli_opt(18, 5, 9, 731).unwrap();
        let record = ledger
            .record_sign_in("Employee 8", day(), precise, "5 min late")
            .await
            .unwrap();
        assert_eq!(record.sign_in, Some(t(18, 5, 9)));
    }

    #[actix_web::test]
    async fn records_come_back_in_insertion_order() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger(&tmp).await;

        for (name, time) in [("Employee 3", t(17, 50, 0)), ("Employee 1", t(18, 2, 0))] {
            ledger.record_sign_in(name, day(), time, "-").await.unwrap();
        }

        let names: Vec<_> = ledger
            .records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Employee 3", "Employee 1"]);
    }
}
