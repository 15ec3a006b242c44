use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::MySqlPool;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Serialize, FromRow, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": 42,
    "employee_name": "Jane Doe",
    "start_date": "2023-06-10",
    "end_date": "2023-06-12",
    "leave_type_name": "Annual Leave",
    "approved": false,
    "remaining_leave_days": 7,
    "site": "Office"
}))]
pub struct HistoryEntry {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 42)]
    pub employee_id: u64,
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[schema(example = "2023-06-10", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2023-06-12", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Annual Leave")]
    pub leave_type_name: String,
    // Not persisted; always false in the payload.
    #[sqlx(default)]
    pub approved: bool,
    #[schema(example = 7)]
    pub remaining_leave_days: i32,
    #[schema(example = "Office")]
    pub site: String,
}

#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Every stored leave record in insertion order", body = [HistoryEntry]),
        (status = 500, description = "Database failure", body = String)
    ),
    tag = "Leave"
)]
pub async fn leave_history(pool: web::Data<MySqlPool>) -> AppResult<HttpResponse> {
    let entries = sqlx::query_as::<_, HistoryEntry>(
        r#"
        SELECT lr.id,
               lr.employee_id,
               e.full_name AS employee_name,
               lr.start_date,
               lr.end_date,
               lt.name AS leave_type_name,
               lr.remaining_days AS remaining_leave_days,
               s.name AS site
        FROM leave_records lr
        LEFT JOIN leave_types lt ON lr.leave_type_id = lt.id
        JOIN employees e ON lr.employee_id = e.id
        JOIN sites s ON e.site_id = s.id
        ORDER BY lr.id
        "#,
    )
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(entries))
}
