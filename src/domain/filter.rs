use std::collections::BTreeSet;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::domain::entities::cell::{format_number, CellValue, Row};
use crate::domain::entities::column::ColumnConfig;
use crate::domain::entities::grid::SearchTarget;

/// Keeps adjacent fields from matching as one string in the global search.
const FIELD_SEPARATOR: char = '◬';

pub trait DateFormatter: Send + Sync {
    fn format(&self, date: &NaiveDateTime) -> String;
}

/// `Jun 15, 2021`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediumDateFormatter;

impl DateFormatter for MediumDateFormatter {
    fn format(&self, date: &NaiveDateTime) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Formats dates with a caller-chosen chrono pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDateFormatter {
    pattern: String,
}

impl PatternDateFormatter {
    /// `None` for patterns chrono cannot format with.
    pub fn new(pattern: impl Into<String>) -> Option<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return None;
        }
        Some(Self { pattern })
    }
}

impl DateFormatter for PatternDateFormatter {
    fn format(&self, date: &NaiveDateTime) -> String {
        date.format(&self.pattern).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
    Column(String),
    TwoColumns(String, String),
    Global,
}

impl From<&SearchTarget> for FilterPredicate {
    fn from(target: &SearchTarget) -> Self {
        match target {
            SearchTarget::Column(name) => FilterPredicate::Column(name.clone()),
            SearchTarget::TwoColumns(a, b) => FilterPredicate::TwoColumns(a.clone(), b.clone()),
            SearchTarget::Global => FilterPredicate::Global,
        }
    }
}

impl FilterPredicate {
    /// `filter` is expected trimmed and lower-cased; an empty filter matches
    /// every row. `columns` fixes the field order of the global search.
    pub fn matches(
        &self,
        row: &Row,
        filter: &str,
        columns: &[ColumnConfig],
        formatter: &dyn DateFormatter,
    ) -> bool {
        if filter.is_empty() {
            return true;
        }
        match self {
            FilterPredicate::Column(column) => column_matches(row, column, filter, formatter),
            FilterPredicate::TwoColumns(first, second) => {
                column_matches(row, first, filter, formatter)
                    || column_matches(row, second, filter, formatter)
            }
            FilterPredicate::Global => global_search_text(row, columns, formatter).contains(filter),
        }
    }
}

/// Lower-cased text a cell contributes to searching. `None` for composite
/// cells whose search field is missing or dangling.
pub fn searchable_text(cell: &CellValue, formatter: &dyn DateFormatter) -> Option<String> {
    match cell {
        CellValue::Date(date) => Some(formatter.format(date).to_lowercase()),
        CellValue::Composite(composite) => composite.search_value().map(str::to_lowercase),
        CellValue::Text(text) => Some(text.to_lowercase()),
        CellValue::Number(value) => Some(format_number(*value)),
    }
}

fn column_matches(row: &Row, column: &str, filter: &str, formatter: &dyn DateFormatter) -> bool {
    row.get(column)
        .and_then(|cell| searchable_text(cell, formatter))
        .is_some_and(|text| text.contains(filter))
}

/// Every field of `row` joined into one search string: configured columns
/// first, then any other keys in sorted order.
pub fn global_search_text(
    row: &Row,
    columns: &[ColumnConfig],
    formatter: &dyn DateFormatter,
) -> String {
    let configured: BTreeSet<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let ordered = columns
        .iter()
        .filter_map(|c| row.get(&c.name))
        .chain(
            row.iter()
                .filter(|(name, _)| !configured.contains(name.as_str()))
                .map(|(_, cell)| cell),
        );

    let mut text = String::new();
    for cell in ordered {
        if let Some(piece) = searchable_text(cell, formatter) {
            text.push_str(&piece);
        }
        text.push(FIELD_SEPARATOR);
    }
    text
}
