use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// What went wrong inside a single sheet row.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("expected at least 5 columns, found {found}")]
    TooFewColumns { found: usize },

    #[error("invalid start date \"{0}\"")]
    BadStartDate(String),

    #[error("invalid end date \"{0}\"")]
    BadEndDate(String),

    #[error("no employee with email \"{0}\"")]
    UnknownEmail(String),

    #[error("unknown leave type \"{0}\"")]
    UnknownLeaveType(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Application-level errors. `Row` pins a failure to its 1-based,
/// header-inclusive row number so the caller can find it in the sheet.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("multipart field \"file\" is missing")]
    MissingFile,

    #[error("failed to read the uploaded file: {0}")]
    Upload(String),

    #[error("failed to read the workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("the workbook has no worksheets")]
    NoSheet,

    #[error("row {row}: {source}")]
    Row { row: usize, source: RowError },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn for_row(row: usize, source: RowError) -> Self {
        AppError::Row { row, source }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Row {
                source: RowError::Database(_),
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Row { .. } => StatusCode::BAD_REQUEST,
            AppError::Workbook(_) | AppError::NoSheet | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
