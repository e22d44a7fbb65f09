use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::domain::entities::cell::{CellValue, Row};
use crate::domain::entities::grid::{SortDirection, SortState};

/// Comparable form of a cell. Variant order is the cross-kind order:
/// missing values first, then numbers, dates, text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Number(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Key used to order `row` by `column`. Rows without the column and
/// composite cells without a usable search field map to `Missing`.
pub fn sort_key(row: &Row, column: &str) -> SortKey {
    match row.get(column) {
        Some(CellValue::Text(text)) => SortKey::Text(text.to_lowercase()),
        Some(CellValue::Composite(cell)) => match cell.search_value() {
            Some(value) => SortKey::Text(value.to_lowercase()),
            None => SortKey::Missing,
        },
        Some(CellValue::Number(value)) => SortKey::Number(*value),
        Some(CellValue::Date(value)) => SortKey::Date(*value),
        None => SortKey::Missing,
    }
}

/// Stable in-place sort of `indices` (positions in `rows`).
pub fn sort_indices(rows: &[Row], indices: &mut [usize], sort: &SortState) {
    let descending = match sort.direction {
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
        SortDirection::None => return,
    };

    let keys: Vec<SortKey> = rows.iter().map(|row| sort_key(row, &sort.active)).collect();
    indices.sort_by(|&a, &b| {
        let ordering = keys[a].compare(&keys[b]);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
