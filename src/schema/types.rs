use super::tables::Table;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::MySqlRow;
use sqlx::FromRow;
use tokio_postgres::types::ToSql;

/// A row type that can be read from the MySQL source and bound into a PostgreSQL upsert.
///
/// Implementors tie themselves to one [`Table`] and expose their values in the exact order of
/// [`Table::insert_columns`].
pub trait TableRow: for<'r> FromRow<'r, MySqlRow> + Send + Sync + Unpin + 'static {
    /// The table this row type is read from and written to.
    const TABLE: Table;

    /// Values to bind, one per entry of `Self::TABLE.insert_columns()`.
    fn params(&self) -> Vec<&(dyn ToSql + Sync)>;
}

/// A row of the `ems` table.
///
/// The source schema uses capitalised column names, so each field is renamed explicitly.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Employee {
    /// Unique identity of the employee; the upsert conflict key.
    #[sqlx(rename = "Email")]
    pub email: String,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Domain")]
    pub domain: Option<String>,
    #[sqlx(rename = "Role")]
    pub role: String,
    /// Credential, copied as stored.
    #[sqlx(rename = "Pass")]
    pub pass: String,
    #[sqlx(rename = "Mobile")]
    pub mobile: Option<String>,
    /// National ID string.
    #[sqlx(rename = "Adhaar")]
    pub adhaar: Option<String>,
    #[sqlx(rename = "Attendance")]
    pub attendance: Option<i32>,
    #[sqlx(rename = "Leaves")]
    pub leaves: Option<i32>,
    /// Permission level, `basic` unless set otherwise.
    #[sqlx(rename = "Permission")]
    pub permission: Option<String>,
}

impl TableRow for Employee {
    const TABLE: Table = Table::Employees;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.email,
            &self.name,
            &self.domain,
            &self.role,
            &self.pass,
            &self.mobile,
            &self.adhaar,
            &self.attendance,
            &self.leaves,
            &self.permission,
        ]
    }
}

/// A row of the `leave_applications` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LeaveApplication {
    /// Owning employee; must exist in `ems` on the destination.
    pub employee_email: Option<String>,
    pub subject: String,
    pub body: Option<String>,
    pub status: Option<String>,
    pub request_date: Option<NaiveDateTime>,
}

impl TableRow for LeaveApplication {
    const TABLE: Table = Table::LeaveApplications;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.employee_email,
            &self.subject,
            &self.body,
            &self.status,
            &self.request_date,
        ]
    }
}

/// A row of the `work_log` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WorkLogEntry {
    /// Owning employee; must exist in `ems` on the destination.
    pub employee_email: Option<String>,
    pub subject: String,
    pub body: Option<String>,
    pub status: Option<String>,
    pub assigned_date: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDate>,
}

impl TableRow for WorkLogEntry {
    const TABLE: Table = Table::WorkLog;

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.employee_email,
            &self.subject,
            &self.body,
            &self.status,
            &self.assigned_date,
            &self.deadline,
        ]
    }
}
