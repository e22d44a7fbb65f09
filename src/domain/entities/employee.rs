use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;

use crate::domain::entities::cell::{CellValue, CompositeCell, Row};

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const GENDER: &str = "gender";
pub const PHONE: &str = "phone";
pub const DOB: &str = "dob";
pub const EMAIL: &str = "email";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_number(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Builds a grid row from one employee record. `id` and `phone` become
/// numbers, `dob` a date, `name` a link cell searched by its link text;
/// any other field is kept as text.
pub fn employee_row(fields: &BTreeMap<String, String>) -> Row {
    let mut row = Row::new();
    for (key, value) in fields {
        let cell = match key.as_str() {
            ID | PHONE => parse_number(value)
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(value.clone())),
            DOB => match parse_date(value) {
                Some(date) => CellValue::Date(date),
                None => {
                    warn!("unparsable date `{value}`, keeping it as text");
                    CellValue::Text(value.clone())
                }
            },
            NAME => CellValue::Composite(CompositeCell::link(value.trim())),
            _ => CellValue::Text(value.clone()),
        };
        row.insert(key.clone(), cell);
    }
    row
}
