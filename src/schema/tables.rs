use std::fmt;

/// The three tables copied from the source schema, in migration order.
///
/// Each variant carries everything the writer needs to build its statements: the table name
/// (identical on both sides), the columns written on insert, the conflict target and the
/// columns overwritten when that target is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Employees,
    LeaveApplications,
    WorkLog,
}

impl Table {
    /// Fixed migration order. Employees come first so the foreign keys of the other two
    /// tables can resolve inside the same transaction.
    pub const ALL: [Table; 3] = [Table::Employees, Table::LeaveApplications, Table::WorkLog];

    pub fn name(self) -> &'static str {
        match self {
            Table::Employees => "ems",
            Table::LeaveApplications => "leave_applications",
            Table::WorkLog => "work_log",
        }
    }

    /// Columns written by the upsert, in bind order. The generated `id` is never copied.
    pub fn insert_columns(self) -> &'static [&'static str] {
        match self {
            Table::Employees => &[
                "Email",
                "Name",
                "Domain",
                "Role",
                "Pass",
                "Mobile",
                "Adhaar",
                "Attendance",
                "Leaves",
                "Permission",
            ],
            Table::LeaveApplications => &["employee_email", "subject", "body", "status", "request_date"],
            Table::WorkLog => &[
                "employee_email",
                "subject",
                "body",
                "status",
                "assigned_date",
                "deadline",
            ],
        }
    }

    /// Column the `ON CONFLICT` clause is keyed on.
    ///
    /// The two child tables conflict on their own generated `id`, which is never part of
    /// the inserted values, so in practice that clause does not fire and re-runs append.
    pub fn conflict_target(self) -> &'static str {
        match self {
            Table::Employees => "Email",
            Table::LeaveApplications | Table::WorkLog => "id",
        }
    }

    /// Columns overwritten with the incoming value when the conflict target is hit.
    pub fn update_columns(self) -> Vec<&'static str> {
        let target = self.conflict_target();
        self.insert_columns()
            .iter()
            .copied()
            .filter(|column| *column != target)
            .collect()
    }

    /// Idempotent DDL for the destination table.
    pub fn create_statement(self) -> &'static str {
        match self {
            Table::Employees => {
                "CREATE TABLE IF NOT EXISTS ems (
                    id SERIAL PRIMARY KEY,
                    Email VARCHAR(255) UNIQUE NOT NULL,
                    Name VARCHAR(255) NOT NULL,
                    Domain VARCHAR(255),
                    Role VARCHAR(50) NOT NULL,
                    Pass VARCHAR(255) NOT NULL,
                    Mobile VARCHAR(20),
                    Adhaar VARCHAR(20),
                    Attendance INTEGER DEFAULT 0,
                    Leaves INTEGER DEFAULT 0,
                    Permission VARCHAR(50) DEFAULT 'basic'
                )"
            }
            Table::LeaveApplications => {
                "CREATE TABLE IF NOT EXISTS leave_applications (
                    id SERIAL PRIMARY KEY,
                    employee_email VARCHAR(255) REFERENCES ems(Email),
                    subject VARCHAR(255) NOT NULL,
                    body TEXT,
                    status VARCHAR(50) DEFAULT 'Pending',
                    request_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )"
            }
            Table::WorkLog => {
                "CREATE TABLE IF NOT EXISTS work_log (
                    id SERIAL PRIMARY KEY,
                    employee_email VARCHAR(255) REFERENCES ems(Email),
                    subject VARCHAR(255) NOT NULL,
                    body TEXT,
                    status VARCHAR(50) DEFAULT 'Pending',
                    assigned_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    deadline DATE
                )"
            }
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
