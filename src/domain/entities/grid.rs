use crate::domain::entities::cell::Row;
use crate::domain::entities::column::{ColumnConfig, PresentationStyle};

/// Column name that turns a single-column search into a global one.
pub const GLOBAL_FILTER: &str = "globalFilter";
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];
pub const DEFAULT_NO_DATA_MESSAGE: &str = "N/A";
pub const ROW_HEIGHT_PX: usize = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// Next step of a sort-header click on the already active column.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub active: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(active: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: active.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PageState {
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn last_page_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// "1 – 5 of 12" style range label; "0 of 0" when empty.
    pub fn range_label(&self) -> String {
        if self.total_count == 0 || self.page_size == 0 {
            return format!("0 of {}", self.total_count);
        }
        let start = self.page_index * self.page_size;
        let end = (start + self.page_size).min(self.total_count);
        format!("{} – {} of {}", start + 1, end, self.total_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Column(String),
    TwoColumns(String, String),
    Global,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOption {
    pub target: SearchTarget,
    pub label: String,
    pub box_style: PresentationStyle,
}

impl SearchOption {
    /// Search on one column; `globalFilter` selects the global search.
    pub fn on_column(column: impl Into<String>, label: impl Into<String>) -> Self {
        let column = column.into();
        let target = if column == GLOBAL_FILTER {
            SearchTarget::Global
        } else {
            SearchTarget::Column(column)
        };
        Self {
            target,
            label: label.into(),
            box_style: PresentationStyle::new(),
        }
    }

    /// Search on the first two of `columns`.
    pub fn on_two_columns(columns: &[&str], label: impl Into<String>) -> Result<Self, GridError> {
        match columns {
            [first, second, ..] => Ok(Self {
                target: SearchTarget::TwoColumns(first.to_string(), second.to_string()),
                label: label.into(),
                box_style: PresentationStyle::new(),
            }),
            _ => Err(GridError::TwoColumnSearchNeedsTwoColumns(columns.len())),
        }
    }

    pub fn global(label: impl Into<String>) -> Self {
        Self::on_column(GLOBAL_FILTER, label)
    }
}

/// Inputs accepted by the grid. Only `grid_config` and `displayed_columns`
/// are required; `data_source` stays `None` until rows arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub grid_config: Vec<ColumnConfig>,
    pub displayed_columns: Vec<String>,
    pub data_source: Option<Vec<Row>>,
    pub default_sort_column: Option<SortState>,
    pub page_size_options: Vec<usize>,
    pub vertical_scroll_offset_in_rows: Option<usize>,
    pub search_option: Option<SearchOption>,
    pub no_data_message: String,
}

impl GridOptions {
    pub fn new(grid_config: Vec<ColumnConfig>, displayed_columns: Vec<String>) -> Self {
        Self {
            grid_config,
            displayed_columns,
            data_source: None,
            default_sort_column: None,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            vertical_scroll_offset_in_rows: None,
            search_option: None,
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
        }
    }

    /// Displays every configured column in declaration order.
    pub fn all_columns(grid_config: Vec<ColumnConfig>) -> Self {
        let displayed = grid_config.iter().map(|c| c.name.clone()).collect();
        Self::new(grid_config, displayed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    DuplicateColumn(String),
    MissingDropdownValues(String),
    UnknownDisplayedColumn(String),
    UnknownSearchColumn(String),
    UnknownSortColumn(String),
    TwoColumnSearchNeedsTwoColumns(usize),
    EmptyPageSizeOptions,
    InvalidPageSize(usize),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::DuplicateColumn(name) => write!(f, "column `{name}` is configured twice"),
            GridError::MissingDropdownValues(name) => {
                write!(f, "dropdown column `{name}` has no dropdown values")
            }
            GridError::UnknownDisplayedColumn(name) => {
                write!(f, "displayed column `{name}` is not in the grid config")
            }
            GridError::UnknownSearchColumn(name) => {
                write!(f, "search column `{name}` is not in the grid config")
            }
            GridError::UnknownSortColumn(name) => {
                write!(f, "default sort column `{name}` is not in the grid config")
            }
            GridError::TwoColumnSearchNeedsTwoColumns(count) => {
                write!(f, "two-column search needs two columns, got {count}")
            }
            GridError::EmptyPageSizeOptions => write!(f, "page size options must not be empty"),
            GridError::InvalidPageSize(size) => {
                write!(f, "page size {size} is not one of the page size options")
            }
        }
    }
}

impl std::error::Error for GridError {}
