// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportRow, notify_export_success};
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and fitted columns.
pub(crate) fn export_xlsx<T: ExportRow>(rows: &[T], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let headers = T::headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x6B4F2A))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col_index(col)?, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF3ECE2);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, item) in rows.iter().enumerate() {
        let row = u32::try_from(row_index + 1)
            .map_err(|_| AppError::Export("too many rows for a worksheet".into()))?;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in item.to_row().iter().enumerate() {
            write_cell(worksheet, row, col_index(col)?, value, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(col_index(c)?, (*w).min(60) as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", rows.len(), path);
    Ok(())
}

fn col_index(col: usize) -> AppResult<u16> {
    u16::try_from(col).map_err(|_| AppError::Export("too many columns".into()))
}

/// Writes one cell, turning dates, times and numbers into native values.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = excel_serial(s) {
        let fmt = base.set_num_format(num_format);
        worksheet.write_with_format(row, col, serial, &fmt)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>()
        && num.is_finite()
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet.write_with_format(row, col, num, &fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}

/// Excel serial number and number format for `YYYY-MM-DD` and `HH:MM`.
fn excel_serial(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
        return Some(("yyyy-mm-dd", (d - epoch).num_days() as f64));
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(("hh:mm", t.num_seconds_from_midnight() as f64 / 86400.0));
    }
    None
}
