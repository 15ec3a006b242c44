use chrono::NaiveDate;

/// Employee columns the upload path resolves from an email address:
/// the primary key and the service-start date the tenure bonus is
/// computed from.
#[derive(Debug, sqlx::FromRow)]
pub struct Employee {
    pub id: u64,
    pub hire_date: NaiveDate,
}
