use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::StreamExt;
use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::api::warning;
use crate::error::{AppError, AppResult};
use crate::services::ingest;

const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(
        content = String,
        description = "Multipart form with the spreadsheet under a `file` field",
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Every row imported", body = String,
         example = json!("Upload successful: 12 leave records imported")),
        (status = 400, description = "Missing file field or invalid row", body = String),
        (status = 500, description = "Unreadable workbook or database failure", body = String)
    ),
    tag = "Leave"
)]
pub async fn upload_leave_sheet(
    pool: web::Data<MySqlPool>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let data = read_file_field(payload).await?;

    let outcome = ingest::ingest_workbook(pool.get_ref(), &data).await?;

    // Advisory recount; a failure here must not turn a committed upload
    // into an error response.
    match warning::unwarned_negative_balances(pool.get_ref()).await {
        Ok(warnings) => info!(count = warnings.len(), "negative balances pending warning"),
        Err(e) => warn!(error = %e, "warning recount after upload failed"),
    }

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!(
            "Upload successful: {} leave records imported",
            outcome.rows_imported
        )))
}

/// Pull the bytes of the `file` field out of the multipart body.
/// Other fields are skipped; no `file` field at all is a client error.
async fn read_file_field(mut payload: Multipart) -> AppResult<Vec<u8>> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::Upload(e.to_string()))?;
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload.xlsx")
            .to_owned();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::Upload(e.to_string()))?;
            data.extend_from_slice(&chunk);
        }
        info!(filename = %filename, bytes = data.len(), "leave sheet received");
        return Ok(data);
    }
    Err(AppError::MissingFile)
}
