use serde::Serialize;

use crate::model::attendance::AttendanceRecord;

/// Who is where today.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub signed_in: Vec<String>,
    pub signed_out: Vec<String>,
    pub late: Vec<String>,
    pub absent: Vec<String>,
}

/// Classify today's records against the roster.
///
/// A sign-out outranks the sign-in that preceded it. Roster members with no
/// record are absent.
pub fn summarize(records: &[AttendanceRecord], roster: &[String]) -> DashboardSummary {
    let signed_in: Vec<String> = records
        .iter()
        .filter(|r| r.is_signed_in() && !r.is_signed_out())
        .map(|r| r.name.clone())
        .collect();

    let signed_out: Vec<String> = records
        .iter()
        .filter(|r| r.is_signed_out())
        .map(|r| r.name.clone())
        .collect();

    let late = records
        .iter()
        .filter(|r| r.is_late())
        .map(|r| r.name.clone())
        .collect();

    let absent = roster
        .iter()
        .filter(|e| !signed_in.contains(e) && !signed_out.contains(e))
        .cloned()
        .collect();

    DashboardSummary {
        signed_in,
        signed_out,
        late,
        absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::Directory;
    use chrono::{NaiveDate, NaiveTime};

    fn record(name: &str, sign_in: Option<(u32, u32)>, sign_out: Option<(u32, u32)>, late_by: &str) -> AttendanceRecord {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        AttendanceRecord {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            sign_in: sign_in.map(at),
            sign_out: sign_out.map(at),
            status: Some("Present".into()),
            late_by: Some(late_by.to_string()),
            worked_hours: None,
        }
    }

    #[test]
    fn one_late_employee_signed_out_and_everyone_else_absent() {
        let roster = Directory::builtin().names();
        let records = vec![record("Employee 5", Some((18, 15)), Some((18, 47)), "15 min late")];

        let summary = summarize(&records, &roster);

        assert_eq!(summary.signed_in, Vec::<String>::new());
        assert_eq!(summary.signed_out, vec!["Employee 5"]);
        assert_eq!(summary.late, vec!["Employee 5"]);
        assert_eq!(summary.absent.len(), 12);
        assert!(!summary.absent.contains(&"Employee 5".to_string()));
    }

    #[test]
    fn present_employees_are_split_by_sign_out() {
        let roster = Directory::builtin().names();
        let records = vec![
            record("Employee 1", Some((17, 58)), None, "-"),
            record("Employee 2", Some((18, 1)), Some((2, 30)), "1 min late"),
        ];

        let summary = summarize(&records, &roster);

        assert_eq!(summary.signed_in, vec!["Employee 1"]);
        assert_eq!(summary.signed_out, vec!["Employee 2"]);
        assert_eq!(summary.late, vec!["Employee 2"]);
        assert_eq!(summary.absent.first().map(String::as_str), Some("Employee 3"));
        assert_eq!(summary.absent.len(), 11);
    }

    #[test]
    fn missing_late_descriptor_is_not_late() {
        let mut r = record("Employee 4", Some((18, 30)), None, "-");
        r.late_by = None;
        let summary = summarize(&[r], &["Employee 4".to_string()]);
        assert!(summary.late.is_empty());
        assert!(summary.absent.is_empty());
    }
}
