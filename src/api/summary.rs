use actix_web::{HttpResponse, web};
use serde::Serialize;
use sqlx::MySqlPool;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Per employee and leave type: days taken this calendar year and the
/// balance left on the latest record.
#[derive(Serialize, FromRow, ToSchema)]
#[schema(example = json!({
    "employee_id": 42,
    "employee_name": "Jane Doe",
    "site": "Office",
    "leave_type_name": "Annual Leave",
    "used_days": 5,
    "remaining_leave_days": 7
}))]
pub struct SummaryEntry {
    #[schema(example = 42)]
    pub employee_id: u64,
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "Office")]
    pub site: String,
    #[schema(example = "Annual Leave")]
    pub leave_type_name: String,
    #[schema(example = 5)]
    pub used_days: i64,
    #[schema(example = 7)]
    pub remaining_leave_days: i32,
}

#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Current-year usage per employee and leave type", body = [SummaryEntry]),
        (status = 500, description = "Database failure", body = String)
    ),
    tag = "Leave"
)]
pub async fn leave_summary(pool: web::Data<MySqlPool>) -> AppResult<HttpResponse> {
    let entries = sqlx::query_as::<_, SummaryEntry>(
        r#"
        SELECT e.id AS employee_id,
               e.full_name AS employee_name,
               s.name AS site,
               lt.name AS leave_type_name,
               CAST(SUM(DATEDIFF(lr.end_date, lr.start_date) + 1) AS SIGNED) AS used_days,
               (
                   SELECT lr2.remaining_days
                   FROM leave_records lr2
                   WHERE lr2.employee_id = e.id
                     AND lr2.leave_type_id = lt.id
                   ORDER BY lr2.id DESC
                   LIMIT 1
               ) AS remaining_leave_days
        FROM leave_records lr
        JOIN employees e ON lr.employee_id = e.id
        JOIN sites s ON e.site_id = s.id
        JOIN leave_types lt ON lr.leave_type_id = lt.id
        WHERE YEAR(lr.start_date) = YEAR(CURDATE())
        GROUP BY e.id, e.full_name, s.name, lt.id, lt.name
        ORDER BY e.id, lt.id
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}
