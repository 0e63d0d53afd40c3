//! Shared fixtures for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, PayrollResetMarker, RecapRow, TeamType};

pub fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Builds an attendance record with sensible defaults for tests.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: AttendanceRecord,
}

impl RecordBuilder {
    pub fn new(id: &str, worker: &str, date: &str) -> Self {
        Self {
            record: AttendanceRecord {
                id: id.to_string(),
                project_id: "P1".to_string(),
                project_name: Some("Warehouse".to_string()),
                worker_name: worker.to_string(),
                team_type: TeamType::RegularLabor,
                specialist_team_name: None,
                status: AttendanceStatus::Present,
                daily_wage: 200_000,
                kasbon_amount: 0,
                reimburse_amount: 0,
                attendance_date: make_date(date),
                notes: None,
                work_days: 1,
                overtime_hours: Decimal::ZERO,
                overtime_rate: 0,
            },
        }
    }

    pub fn project(mut self, id: &str, name: Option<&str>) -> Self {
        self.record.project_id = id.to_string();
        self.record.project_name = name.map(str::to_string);
        self
    }

    pub fn team(mut self, team_type: TeamType) -> Self {
        self.record.team_type = team_type;
        self
    }

    pub fn specialist(mut self, name: &str) -> Self {
        self.record.team_type = TeamType::Specialist;
        self.record.specialist_team_name = Some(name.to_string());
        self
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn wage(mut self, daily_wage: i64) -> Self {
        self.record.daily_wage = daily_wage;
        self
    }

    pub fn kasbon(mut self, amount: i64) -> Self {
        self.record.kasbon_amount = amount;
        self
    }

    pub fn reimburse(mut self, amount: i64) -> Self {
        self.record.reimburse_amount = amount;
        self
    }

    pub fn work_days(mut self, days: u32) -> Self {
        self.record.work_days = days;
        self
    }

    pub fn overtime(mut self, hours: Decimal, rate: i64) -> Self {
        self.record.overtime_hours = hours;
        self.record.overtime_rate = rate;
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.record
    }

    pub fn row(self) -> RecapRow {
        crate::calculation::annotate(&self.record)
    }
}

pub fn team_marker(project_id: &str, team_type: TeamType, paid_until: &str) -> PayrollResetMarker {
    PayrollResetMarker {
        project_id: project_id.to_string(),
        team_type,
        specialist_team_name: None,
        worker_name: None,
        paid_until_date: make_date(paid_until),
    }
}

pub fn worker_marker(
    project_id: &str,
    team_type: TeamType,
    worker: &str,
    paid_until: &str,
) -> PayrollResetMarker {
    PayrollResetMarker {
        worker_name: Some(worker.to_string()),
        ..team_marker(project_id, team_type, paid_until)
    }
}
