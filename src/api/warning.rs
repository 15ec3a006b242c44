use actix_web::{HttpResponse, web};
use serde::Serialize;
use sqlx::MySqlPool;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

use crate::error::AppResult;

/// A leave record whose balance went negative and has not yet been
/// flagged to the employee.
#[derive(Serialize, FromRow, ToSchema)]
#[schema(example = json!({
    "warningID": 7,
    "EmployeeID": 42,
    "EmployeeName": "Jane Doe",
    "Email": "jane.doe@example.com",
    "Remaining": -3,
    "LeaveType": "Sick Leave"
}))]
pub struct WarningEntry {
    #[serde(rename = "warningID")]
    pub warning_id: u64,
    #[serde(rename = "EmployeeID")]
    pub employee_id: u64,
    #[serde(rename = "EmployeeName")]
    pub employee_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Remaining")]
    pub remaining: i32,
    #[serde(rename = "LeaveType")]
    pub leave_type: String,
}

/// Records with `remaining_days < 0` still waiting on a warning.
pub async fn unwarned_negative_balances(
    pool: &MySqlPool,
) -> Result<Vec<WarningEntry>, sqlx::Error> {
    sqlx::query_as::<_, WarningEntry>(
        r#"
        SELECT lr.id AS warning_id,
               e.id AS employee_id,
               e.full_name AS employee_name,
               e.email,
               lr.remaining_days AS remaining,
               lt.name AS leave_type
        FROM leave_records lr
        JOIN leave_types lt ON lt.id = lr.leave_type_id
        JOIN employees e ON lr.employee_id = e.id
        WHERE lr.remaining_days < 0
          AND lr.warned = FALSE
        "#,
    )
    .fetch_all(pool)
    .await
}

#[utoipa::path(
    get,
    path = "/api/warning",
    responses(
        (status = 200, description = "Negative balances not yet warned", body = [WarningEntry]),
        (status = 500, description = "Database failure", body = String)
    ),
    tag = "Leave"
)]
pub async fn leave_warnings(pool: web::Data<MySqlPool>) -> AppResult<HttpResponse> {
    let warnings = unwarned_negative_balances(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_payload_field_casing() {
        let entry = WarningEntry {
            warning_id: 7,
            employee_id: 42,
            employee_name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            remaining: -3,
            leave_type: "Sick Leave".into(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "warningID": 7,
                "EmployeeID": 42,
                "EmployeeName": "Jane Doe",
                "Email": "jane.doe@example.com",
                "Remaining": -3,
                "LeaveType": "Sick Leave"
            })
        );
    }
}
