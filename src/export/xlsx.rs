//! XLSX export
//!
//! A single worksheet named [`SHEET_NAME`](super::SHEET_NAME) with a styled,
//! frozen header row, banded data rows and columns sized to their content.

use std::path::Path;

use chrono::Datelike;
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use unicode_width::UnicodeWidthStr;

use crate::error::{CabinetError, CabinetResult};
use crate::models::CabinetRecord;

use super::rows::{ExportRow, EXPORT_HEADERS};
use super::SHEET_NAME;

const HEADER_FILL: u32 = 0x2F75B5;
const BAND_FILL: u32 = 0xEAF3FB;
const PLAIN_FILL: u32 = 0xFFFFFF;
const MONEY_FORMAT: &str = "#,##0.00";
const DATE_FORMAT: &str = "yyyy-mm-dd";
/// Rendered width of a date cell
const DATE_WIDTH: usize = 10;

/// Export records to an XLSX workbook at `path`
pub fn export_xlsx(records: &[CabinetRecord], path: &Path) -> CabinetResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = EXPORT_HEADERS.iter().map(|h| h.width()).collect();

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        let fill = if index % 2 == 0 { BAND_FILL } else { PLAIN_FILL };
        let widths = write_row(worksheet, row, &ExportRow::from(record), fill)?;

        for (col, width) in widths.iter().enumerate() {
            col_widths[col] = col_widths[col].max(*width);
        }
    }

    for (col, width) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    Ok(())
}

/// Write one record row; returns the rendered width of each cell
fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    data: &ExportRow,
    fill: u32,
) -> CabinetResult<[usize; EXPORT_HEADERS.len()]> {
    let text = cell_format(fill);
    let money = cell_format(fill)
        .set_num_format(MONEY_FORMAT)
        .set_align(FormatAlign::Right);
    let count = cell_format(fill).set_align(FormatAlign::Right);
    let date = cell_format(fill).set_num_format(DATE_FORMAT);

    let texts = [
        &data.id,
        &data.last_name,
        &data.first_name,
        &data.cabinet_label,
    ];
    for (col, value) in texts.iter().enumerate() {
        worksheet
            .write_with_format(row, col as u16, value.as_str(), &text)
            .map_err(to_export_error)?;
    }

    let amounts = [data.total_revenue, data.daily_revenue, data.balance];
    for (offset, value) in amounts.iter().enumerate() {
        worksheet
            .write_with_format(row, (4 + offset) as u16, *value, &money)
            .map_err(to_export_error)?;
    }

    let deals = [data.deals_before_midnight, data.deals_after_midnight];
    for (offset, value) in deals.iter().enumerate() {
        worksheet
            .write_with_format(row, (7 + offset) as u16, *value, &count)
            .map_err(to_export_error)?;
    }

    let day = ExcelDateTime::from_ymd(
        data.date.year() as u16,
        data.date.month() as u8,
        data.date.day() as u8,
    )
    .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 9, &day, &date)
        .map_err(to_export_error)?;

    Ok([
        data.id.width(),
        data.last_name.width(),
        data.first_name.width(),
        data.cabinet_label.width(),
        amount_width(data.total_revenue),
        amount_width(data.daily_revenue),
        amount_width(data.balance),
        data.deals_before_midnight.to_string().len(),
        data.deals_after_midnight.to_string().len(),
        DATE_WIDTH,
    ])
}

fn cell_format(fill: u32) -> Format {
    Format::new()
        .set_background_color(Color::RGB(fill))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Width of an amount rendered with thousands separators and two decimals
fn amount_width(value: f64) -> usize {
    let digits = format!("{:.2}", value.abs()).len();
    let integer_digits = digits.saturating_sub(3);
    let separators = integer_digits.saturating_sub(1) / 3;
    digits + separators + usize::from(value < 0.0)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> CabinetError {
    CabinetError::Export(e.to_string())
}
