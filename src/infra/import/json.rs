use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde_json::{Map, Value};

use crate::domain::entities::cell::{
    CompositeCell, Row, DESCRIPTION_FIELD, LINK_FIELD, SEARCH_SORT_FIELD,
};
use crate::domain::entities::employee::employee_row;

/// Collection key used by json-server style mock databases.
const EMPLOYEES_KEY: &str = "employees";

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// `{"Link": .., "Description": .., "SearchSortField": ..}` as a composite
/// cell. `None` when the object carries no string `Link`. A missing
/// `SearchSortField` is kept missing; the grid treats it as a shape violation.
fn composite_from_object(object: &Map<String, Value>) -> Option<CompositeCell> {
    let link = object.get(LINK_FIELD)?.as_str()?;
    let mut cell = CompositeCell::link(link);
    if let Some(description) = object.get(DESCRIPTION_FIELD).and_then(Value::as_str) {
        cell = cell.with_description(description);
    }
    match object.get(SEARCH_SORT_FIELD).and_then(Value::as_str) {
        Some(field) => cell = cell.searched_by(field),
        None => cell.search_sort_field = None,
    }
    Some(cell)
}

/// Accepts either a bare array of employees or a `{ "employees": [...] }`
/// document. Nulls and nested values are skipped.
pub fn parse_employee_json(text: &str) -> Result<Vec<Row>> {
    let document: Value = serde_json::from_str(text).context("failed to parse employee json")?;
    let records = match &document {
        Value::Array(records) => records,
        Value::Object(map) => match map.get(EMPLOYEES_KEY) {
            Some(Value::Array(records)) => records,
            _ => anyhow::bail!("json document has no `{EMPLOYEES_KEY}` array"),
        },
        _ => anyhow::bail!("employee json must be an array or an object"),
    };

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let Value::Object(map) = record else {
                anyhow::bail!("employee #{idx} is not an object");
            };
            let fields: BTreeMap<String, String> = map
                .iter()
                .filter_map(|(key, value)| scalar_to_string(value).map(|text| (key.clone(), text)))
                .collect();
            let mut row = employee_row(&fields);
            for (key, value) in map {
                match value {
                    Value::Object(object) => match composite_from_object(object) {
                        Some(cell) => row.insert(key.clone(), cell),
                        None => warn!("employee #{idx}: `{key}` is an object without a `{LINK_FIELD}`, skipped"),
                    },
                    Value::Array(_) => warn!("employee #{idx}: `{key}` is an array, skipped"),
                    _ => {}
                }
            }
            Ok(row)
        })
        .collect()
}

pub fn read_employee_json(json_path: &Path) -> Result<Vec<Row>> {
    let text = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read json: {}", json_path.display()))?;
    parse_employee_json(&text).with_context(|| format!("in {}", json_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::cell::CellValue;

    #[test]
    fn reads_bare_arrays_and_mock_databases() {
        let bare = r#"[{"id": 1, "name": "Mark", "phone": 2345978640, "dob": "1988-10-25"}]"#;
        let rows = parse_employee_json(bare).expect("bare array should parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("phone"), Some(&CellValue::Number(2345978640.0)));

        let db = r#"{"employees": [{"id": 1}, {"id": 2, "email": null}]}"#;
        let rows = parse_employee_json(db).expect("mock db should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("email"), None);
    }

    #[test]
    fn cell_objects_become_composite_cells() {
        let text = r#"[
            {"id": 1, "name": {"Link": "Bob", "Description": "Ops", "SearchSortField": "Description"}},
            {"id": 2, "name": {"Link": "Amy", "SearchSortField": "Link"}},
            {"id": 3, "name": {"Link": "Zed"}, "tags": ["a"], "meta": {"x": 1}}
        ]"#;
        let rows = parse_employee_json(text).expect("cell objects should parse");

        assert_eq!(
            rows[0].get("name"),
            Some(&CellValue::Composite(
                CompositeCell::link("Bob")
                    .with_description("Ops")
                    .searched_by(DESCRIPTION_FIELD)
            ))
        );
        assert_eq!(
            rows[1].get("name"),
            Some(&CellValue::Composite(CompositeCell::link("Amy")))
        );
        match rows[2].get("name") {
            Some(CellValue::Composite(cell)) => assert_eq!(cell.search_value(), None),
            other => panic!("expected a composite cell, got {other:?}"),
        }
        assert_eq!(rows[2].get("tags"), None);
        assert_eq!(rows[2].get("meta"), None);
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(parse_employee_json(r#"{"people": []}"#).is_err());
        assert!(parse_employee_json("42").is_err());
        assert!(parse_employee_json("[1, 2]").is_err());
        assert!(parse_employee_json("not json").is_err());
    }
}
