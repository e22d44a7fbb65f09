use std::collections::BTreeMap;

use chrono::NaiveDateTime;

pub const LINK_FIELD: &str = "Link";
pub const DESCRIPTION_FIELD: &str = "Description";
pub const SEARCH_SORT_FIELD: &str = "SearchSortField";

/// A link cell with an optional description line. `search_sort_field` names
/// the sub-field (`Link` or `Description`) used for sorting and filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCell {
    pub link: String,
    pub description: Option<String>,
    pub search_sort_field: Option<String>,
}

impl CompositeCell {
    pub fn link(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            description: None,
            search_sort_field: Some(LINK_FIELD.to_string()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn searched_by(mut self, field: impl Into<String>) -> Self {
        self.search_sort_field = Some(field.into());
        self
    }

    /// Sub-value named by `search_sort_field`. `None` when the pointer is
    /// absent or names a field this cell does not carry.
    pub fn search_value(&self) -> Option<&str> {
        match self.search_sort_field.as_deref()? {
            LINK_FIELD => Some(self.link.as_str()),
            DESCRIPTION_FIELD => self.description.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Composite(CompositeCell),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Date(value)
    }
}

impl From<CompositeCell> for CellValue {
    fn from(value: CompositeCell) -> Self {
        CellValue::Composite(value)
    }
}

/// One record of the grid, keyed by column name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CellValue)> {
        self.cells.iter()
    }
}

/// Drops a trailing `.0` and trailing zeros so ids and phone numbers read
/// the way they were entered.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract().abs() < f64::EPSILON && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}
