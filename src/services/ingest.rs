use chrono::Datelike;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::{debug, info};

use crate::error::{AppError, AppResult, RowError};
use crate::model::employee::Employee;
use crate::model::leave_type::LeaveType;
use crate::services::balance;
use crate::services::sheet::{self, SheetRow};

/// Outcome of a fully committed sheet import.
#[derive(Debug, Clone, Copy)]
pub struct IngestOutcome {
    pub rows_imported: u64,
}

/// Import every data row of an uploaded workbook inside one transaction.
///
/// Rows are processed in sheet order; the first invalid row aborts the whole
/// upload and the dropped transaction rolls back, so a failed upload leaves
/// no records behind. Later rows of the same upload see the days inserted by
/// earlier ones when summing prior usage.
pub async fn ingest_workbook(pool: &MySqlPool, data: &[u8]) -> AppResult<IngestOutcome> {
    let rows = sheet::read_rows(data)?;
    let mut tx = pool.begin().await?;
    let mut rows_imported = 0u64;

    for (index, cells) in rows.iter().enumerate() {
        if index == 0 {
            // header row
            continue;
        }
        let row_number = index + 1;
        let row = sheet::parse_row(row_number, cells)?;

        let employee = employee_by_email(&mut tx, &row.email)
            .await
            .map_err(|e| AppError::for_row(row_number, RowError::Database(e)))?
            .ok_or_else(|| {
                AppError::for_row(row_number, RowError::UnknownEmail(row.email.clone()))
            })?;

        let leave_type = leave_type_by_name(&mut tx, &row.leave_type)
            .await
            .map_err(|e| AppError::for_row(row_number, RowError::Database(e)))?
            .ok_or_else(|| {
                AppError::for_row(row_number, RowError::UnknownLeaveType(row.leave_type.clone()))
            })?;

        let used_days = used_days_in_year(&mut tx, employee.id, leave_type.id, row.start_date.year())
            .await
            .map_err(|e| AppError::for_row(row_number, RowError::Database(e)))?;

        let remaining = balance::remaining_balance(
            employee.hire_date,
            row.start_date,
            row.end_date,
            leave_type.base_days,
            &row.site,
            used_days,
        );

        insert_leave_record(&mut tx, employee.id, leave_type.id, &row, remaining)
            .await
            .map_err(|e| AppError::for_row(row_number, RowError::Database(e)))?;

        rows_imported += 1;
        debug!(row_number, employee_id = employee.id, remaining, "leave row imported");
    }

    tx.commit().await?;
    info!(rows_imported, "leave sheet committed");
    Ok(IngestOutcome { rows_imported })
}

async fn employee_by_email(
    tx: &mut Transaction<'_, MySql>,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, hire_date
        FROM employees
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(&mut **tx)
    .await
}

async fn leave_type_by_name(
    tx: &mut Transaction<'_, MySql>,
    name: &str,
) -> Result<Option<LeaveType>, sqlx::Error> {
    sqlx::query_as::<_, LeaveType>(
        r#"
        SELECT id, base_days
        FROM leave_types
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(&mut **tx)
    .await
}

/// Sum of the inclusive day spans of this employee's existing records of the
/// same leave type whose start date falls in `year`.
async fn used_days_in_year(
    tx: &mut Transaction<'_, MySql>,
    employee_id: u64,
    leave_type_id: u64,
    year: i32,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT CAST(COALESCE(SUM(DATEDIFF(end_date, start_date) + 1), 0) AS SIGNED)
        FROM leave_records
        WHERE employee_id = ?
          AND leave_type_id = ?
          AND YEAR(start_date) = ?
        "#,
    )
    .bind(employee_id)
    .bind(leave_type_id)
    .bind(year)
    .fetch_one(&mut **tx)
    .await
}

async fn insert_leave_record(
    tx: &mut Transaction<'_, MySql>,
    employee_id: u64,
    leave_type_id: u64,
    row: &SheetRow,
    remaining: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO leave_records
            (employee_id, start_date, end_date, leave_type_id, remaining_days)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(row.start_date)
    .bind(row.end_date)
    .bind(leave_type_id)
    .bind(remaining)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
