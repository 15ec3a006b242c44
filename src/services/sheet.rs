use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDate;

use crate::error::{AppError, AppResult, RowError};

/// Fixed column order of the upload sheet.
pub const REQUIRED_COLUMNS: usize = 5;

/// Accepted date spellings, tried in order. chrono's `%d` matches both `15`
/// and `5`, so these two patterns cover `15-Jan-24`, `5-Jan-24`, `5-Jan-2024`
/// and `15-Jan-2024`.
const DATE_FORMATS: [&str; 2] = ["%d-%b-%y", "%d-%b-%Y"];

/// One validated data row of the upload sheet, in sheet column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub site: String,
}

/// chrono's `%y`/`%Y` accept under-width years, so the year segment is
/// checked for exactly two or four digits before the formats run.
pub fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let year = value.splitn(3, '-').nth(2)?;
    if !(year.len() == 2 || year.len() == 4) || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Every row of the first worksheet as displayed text. Trailing empty cells
/// are trimmed per row, so a row missing its last values really is short and
/// fails the column-count check.
pub fn read_rows(data: &[u8]) -> AppResult<Vec<Vec<String>>> {
    let mut workbook = Xlsx::new(Cursor::new(data))?;
    let range = workbook.worksheet_range_at(0).ok_or(AppError::NoSheet)??;
    Ok(range.rows().map(row_text).collect())
}

fn row_text(row: &[Data]) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

/// Validate one data row. `row_number` is 1-based and counts the header, so
/// the first data row is row 2; it only labels errors.
pub fn parse_row(row_number: usize, cells: &[String]) -> AppResult<SheetRow> {
    if cells.len() < REQUIRED_COLUMNS {
        return Err(AppError::for_row(
            row_number,
            RowError::TooFewColumns { found: cells.len() },
        ));
    }

    let start_date = try_parse_date(&cells[1]).ok_or_else(|| {
        AppError::for_row(row_number, RowError::BadStartDate(cells[1].clone()))
    })?;
    let end_date = try_parse_date(&cells[2]).ok_or_else(|| {
        AppError::for_row(row_number, RowError::BadEndDate(cells[2].clone()))
    })?;

    Ok(SheetRow {
        email: cells[0].clone(),
        start_date,
        end_date,
        leave_type: cells[3].clone(),
        site: cells[4].clone(),
    })
}
