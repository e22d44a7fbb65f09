use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::cell::Row;
use crate::domain::entities::employee::employee_row;

pub fn read_employee_csv(csv_path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse csv record #{row_idx}"))?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(col_idx, name)| {
                let value = record.get(col_idx).unwrap_or("");
                (name.trim().to_string(), value.to_string())
            })
            .filter(|(name, _)| !name.is_empty())
            .collect();
        rows.push(employee_row(&fields));
    }

    Ok(rows)
}
