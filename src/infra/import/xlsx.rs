use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};

use crate::domain::entities::cell::Row;
use crate::domain::entities::employee::employee_row;

/// Serial of 9999-12-31, the last day Excel can represent.
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Serial day numbers in Excel count from 1899-12-30. Values outside
/// Excel's date range yield `None`.
fn excel_serial_to_iso(serial: f64) -> Option<String> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL + 1.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    let moment = epoch.checked_add_signed(Duration::try_seconds(seconds)?)?;
    Some(moment.format("%Y-%m-%dT%H:%M:%S").to_string())
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => excel_serial_to_iso(v.as_f64()).unwrap_or_else(|| v.to_string()),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Reads the first sheet; its first row holds the field names.
pub fn read_employee_xlsx(xlsx_path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        anyhow::bail!("xlsx has no sheets: {}", xlsx_path.display())
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_string(cell).trim().to_string())
        .collect();
    if headers.iter().all(|name| name.is_empty()) {
        anyhow::bail!("sheet {sheet_name} has no header row")
    }

    let rows = sheet_rows
        .filter(|cells| cells.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|cells| {
            let fields: BTreeMap<String, String> = headers
                .iter()
                .zip(cells.iter())
                .filter(|(name, cell)| !name.is_empty() && !matches!(cell, Data::Empty))
                .map(|(name, cell)| (name.clone(), cell_to_string(cell)))
                .collect();
            employee_row(&fields)
        })
        .collect();

    Ok(rows)
}
