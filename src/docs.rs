use crate::api::history::HistoryEntry;
use crate::api::summary::SummaryEntry;
use crate::api::warning::WarningEntry;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaves API",
        version = "1.0.0",
        description = r#"
## Leave Tracking Service

Backend for importing leave spreadsheets and serving leave balances.

### Key Features
- **Spreadsheet Import**
  - Upload `.xlsx` sheets of leave requests; balances are computed on insert
- **Leave History**
  - Full record list with computed remaining days per request
- **Balance Warnings**
  - Employees whose balance went negative and have not been warned yet
- **Usage Summary**
  - Current-year totals per employee and leave type

### Response Format
- Read endpoints return JSON arrays
- Upload responds with a plain-text outcome line

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::upload::upload_leave_sheet,
        crate::api::history::leave_history,
        crate::api::warning::leave_warnings,
        crate::api::summary::leave_summary
    ),
    components(
        schemas(
            HistoryEntry,
            WarningEntry,
            SummaryEntry
        )
    ),
    tags(
        (name = "Leave", description = "Leave import and balance APIs"),
    )
)]
pub struct ApiDoc;
