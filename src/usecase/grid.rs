use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::entities::cell::{format_number, CellValue, Row};
use crate::domain::entities::column::{ColumnConfig, ColumnType};
use crate::domain::entities::grid::{
    GridError, GridOptions, PageState, SearchOption, SearchTarget, SortDirection, SortState,
    ROW_HEIGHT_PX,
};
use crate::domain::filter::{DateFormatter, FilterPredicate, MediumDateFormatter};
use crate::domain::sort::sort_indices;

/// Row-level interaction reported back to the host. The grid itself never
/// changes state because of these.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    LinkClicked {
        source_index: usize,
        row: Row,
    },
    SelectionChanged {
        source_index: usize,
        row: Row,
        column: String,
        selected_value: String,
    },
    CustomAction {
        source_index: usize,
        row: Row,
        column: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    /// Position in the row array last passed to the grid.
    pub source_index: usize,
    pub row: Row,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub columns: Vec<ColumnConfig>,
    pub rows: Vec<VisibleRow>,
    pub sort: Option<SortState>,
    pub page: PageState,
    pub page_size_options: Vec<usize>,
    pub search: Option<SearchOption>,
    pub filter: String,
    /// No rows supplied yet, or the supplied array is empty.
    pub is_empty: bool,
    /// Rows are present but the current filter keeps none of them.
    pub no_matches: bool,
    pub is_loading: bool,
    pub no_data_message: String,
    pub scroll_max_height_px: Option<usize>,
}

pub fn validate_options(options: &GridOptions) -> Result<(), GridError> {
    let mut names = BTreeSet::new();
    for column in &options.grid_config {
        if !names.insert(column.name.as_str()) {
            return Err(GridError::DuplicateColumn(column.name.clone()));
        }
        if column.column_type == ColumnType::Dropdown
            && column.dropdown_values.as_ref().map_or(true, |v| v.is_empty())
        {
            return Err(GridError::MissingDropdownValues(column.name.clone()));
        }
    }

    if let Some(unknown) = options
        .displayed_columns
        .iter()
        .find(|name| !names.contains(name.as_str()))
    {
        return Err(GridError::UnknownDisplayedColumn(unknown.clone()));
    }

    if let Some(search) = &options.search_option {
        let searched: Vec<&String> = match &search.target {
            SearchTarget::Column(name) => vec![name],
            SearchTarget::TwoColumns(first, second) => vec![first, second],
            SearchTarget::Global => Vec::new(),
        };
        if let Some(unknown) = searched.into_iter().find(|name| !names.contains(name.as_str())) {
            return Err(GridError::UnknownSearchColumn(unknown.clone()));
        }
    }

    if let Some(sort) = &options.default_sort_column {
        if !names.contains(sort.active.as_str()) {
            return Err(GridError::UnknownSortColumn(sort.active.clone()));
        }
    }

    if options.page_size_options.is_empty() {
        return Err(GridError::EmptyPageSizeOptions);
    }
    if options.page_size_options.contains(&0) {
        return Err(GridError::InvalidPageSize(0));
    }

    Ok(())
}

pub struct DataGrid {
    columns: Vec<ColumnConfig>,
    displayed_columns: Vec<String>,
    rows: Option<Vec<Row>>,
    sort: Option<SortState>,
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    scroll_offset_rows: Option<usize>,
    search: Option<SearchOption>,
    predicate: FilterPredicate,
    filter: String,
    no_data_message: String,
    formatter: Arc<dyn DateFormatter>,
    /// Filtered and sorted positions into `rows`.
    view: Vec<usize>,
    events: VecDeque<GridEvent>,
}

impl DataGrid {
    pub fn initialize(options: GridOptions) -> Result<Self, GridError> {
        validate_options(&options)?;

        // Without a configured search the box is hidden, but filtering still
        // falls back to the global search.
        let predicate = options
            .search_option
            .as_ref()
            .map(|search| FilterPredicate::from(&search.target))
            .unwrap_or(FilterPredicate::Global);

        let mut grid = Self {
            page_size: options.page_size_options[0],
            columns: options.grid_config,
            displayed_columns: options.displayed_columns,
            rows: None,
            sort: options.default_sort_column,
            page_index: 0,
            page_size_options: options.page_size_options,
            scroll_offset_rows: options.vertical_scroll_offset_in_rows,
            search: options.search_option,
            predicate,
            filter: String::new(),
            no_data_message: options.no_data_message,
            formatter: Arc::new(MediumDateFormatter),
            view: Vec::new(),
            events: VecDeque::new(),
        };
        if let Some(rows) = options.data_source {
            grid.set_data(rows);
        }
        debug!(
            "grid initialized: {} columns, predicate {:?}",
            grid.columns.len(),
            grid.predicate
        );
        Ok(grid)
    }

    pub fn with_date_formatter(mut self, formatter: Arc<dyn DateFormatter>) -> Self {
        self.formatter = formatter;
        self.refresh();
        self
    }

    /// Replaces the row array. Sort state, filter text and the page index
    /// survive; the page index is clamped to the new last page.
    pub fn set_data(&mut self, rows: Vec<Row>) {
        let violations = self.count_shape_violations(&rows);
        if violations > 0 {
            warn!("{violations} cells are missing or carry no usable search field; they sort first and never match a filter");
        }
        info!("grid received {} rows", rows.len());
        self.rows = Some(rows);
        self.refresh();
    }

    /// Clears the rows, returning the grid to its loading state.
    pub fn clear_data(&mut self) {
        self.rows = None;
        self.refresh();
    }

    pub fn on_inputs_changed(&mut self, rows: Option<Vec<Row>>) -> RenderState {
        match rows {
            Some(rows) => self.set_data(rows),
            None => self.clear_data(),
        }
        self.render()
    }

    /// Sort-header click. Unknown and non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.name == column && c.sort);
        if !sortable {
            debug!("ignoring sort on non-sortable column `{column}`");
            return;
        }

        let direction = match &self.sort {
            Some(current) if current.active == column => current.direction.cycle(),
            _ => SortDirection::Ascending,
        };
        self.set_sort(SortState::new(column, direction));
    }

    pub fn set_sort(&mut self, sort: SortState) {
        debug!("sort changed to {} {:?}", sort.active, sort.direction);
        self.sort = Some(sort);
        self.page_index = 0;
        self.refresh();
    }

    pub fn apply_filter(&mut self, raw: &str) {
        self.filter = raw.trim().to_lowercase();
        self.page_index = 0;
        self.refresh();
        debug!("filter `{}` keeps {} rows", self.filter, self.view.len());
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index.min(self.page_state().last_page_index());
    }

    /// Keeps the first row of the current page visible after the change.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), GridError> {
        if !self.page_size_options.contains(&page_size) {
            return Err(GridError::InvalidPageSize(page_size));
        }
        let first_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.set_page_index(first_row / page_size);
        Ok(())
    }

    pub fn next_page(&mut self) {
        if self.page_state().has_next() {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self) {
        self.page_index = self.page_state().last_page_index();
    }

    pub fn link_clicked(&mut self, source_index: usize) -> bool {
        let Some(row) = self.source_row(source_index) else {
            return false;
        };
        self.events.push_back(GridEvent::LinkClicked { source_index, row });
        true
    }

    pub fn selection_changed(
        &mut self,
        source_index: usize,
        column: &str,
        selected_value: impl Into<String>,
    ) -> bool {
        let Some(row) = self.source_row(source_index) else {
            return false;
        };
        self.events.push_back(GridEvent::SelectionChanged {
            source_index,
            row,
            column: column.to_string(),
            selected_value: selected_value.into(),
        });
        true
    }

    pub fn custom_action(&mut self, source_index: usize, column: &str) -> bool {
        let Some(row) = self.source_row(source_index) else {
            return false;
        };
        self.events.push_back(GridEvent::CustomAction {
            source_index,
            row,
            column: column.to_string(),
        });
        true
    }

    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.rows.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.as_ref().map_or(true, Vec::is_empty)
    }

    pub fn no_matches(&self) -> bool {
        !self.is_empty() && self.view.is_empty()
    }

    #[cfg(test)]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    #[cfg(test)]
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn page_state(&self) -> PageState {
        PageState {
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.view.len(),
        }
    }

    /// Text shown for `cell` in a plain, date or link cell.
    pub fn display_text(&self, cell: &CellValue) -> String {
        match cell {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Date(date) => self.formatter.format(date),
            CellValue::Composite(composite) => composite.link.clone(),
        }
    }

    pub fn render(&self) -> RenderState {
        let page = self.page_state();
        let rows = self.rows.as_deref().unwrap_or_default();
        let visible = self
            .view
            .iter()
            .skip(page.page_index * page.page_size)
            .take(page.page_size)
            .map(|&source_index| VisibleRow {
                source_index,
                row: rows[source_index].clone(),
            })
            .collect();

        let columns = self
            .displayed_columns
            .iter()
            .filter_map(|name| self.columns.iter().find(|c| &c.name == name))
            .cloned()
            .collect();

        RenderState {
            columns,
            rows: visible,
            sort: self.sort.clone(),
            page,
            page_size_options: self.page_size_options.clone(),
            search: self.search.clone(),
            filter: self.filter.clone(),
            is_empty: self.is_empty(),
            no_matches: self.no_matches(),
            is_loading: self.is_loading(),
            no_data_message: self.no_data_message.clone(),
            scroll_max_height_px: self
                .scroll_offset_rows
                .filter(|&rows| rows > 0)
                .map(|rows| ROW_HEIGHT_PX * (rows + 1)),
        }
    }

    fn source_row(&self, source_index: usize) -> Option<Row> {
        let row = self
            .rows
            .as_ref()
            .and_then(|rows| rows.get(source_index))
            .cloned();
        if row.is_none() {
            warn!("interaction on unknown row {source_index}");
        }
        row
    }

    fn refresh(&mut self) {
        let Some(rows) = self.rows.as_deref() else {
            self.view.clear();
            self.page_index = 0;
            return;
        };

        let mut view: Vec<usize> = (0..rows.len())
            .filter(|&idx| {
                self.predicate
                    .matches(&rows[idx], &self.filter, &self.columns, self.formatter.as_ref())
            })
            .collect();
        if let Some(sort) = &self.sort {
            sort_indices(rows, &mut view, sort);
        }
        self.view = view;
        self.page_index = self.page_index.min(self.page_state().last_page_index());
    }

    fn count_shape_violations(&self, rows: &[Row]) -> usize {
        rows.iter()
            .map(|row| {
                self.columns
                    .iter()
                    .filter(|column| column.column_type != ColumnType::CustomTemplate)
                    .filter(|column| match row.get(&column.name) {
                        None => true,
                        Some(CellValue::Composite(cell)) => cell.search_value().is_none(),
                        Some(_) => false,
                    })
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::cell::CompositeCell;
    use crate::domain::entities::column::DropdownValue;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    fn config() -> Vec<ColumnConfig> {
        vec![
            ColumnConfig::new("id", "Id", ColumnType::Text).sortable(),
            ColumnConfig::new("name", "Name", ColumnType::Link).sortable(),
            ColumnConfig::new("dob", "DOB", ColumnType::Date).sortable(),
            ColumnConfig::new("email", "Email", ColumnType::Text),
        ]
    }

    fn amy_and_bob() -> Vec<Row> {
        vec![
            Row::new()
                .with("id", 1_i64)
                .with("name", CompositeCell::link("Bob"))
                .with("dob", date(2020, 1, 1))
                .with("email", "bob@example.com"),
            Row::new()
                .with("id", 2_i64)
                .with("name", CompositeCell::link("Amy"))
                .with("dob", date(2021, 6, 15))
                .with("email", "amy@example.com"),
        ]
    }

    fn numbered(count: i64) -> Vec<Row> {
        (0..count)
            .map(|id| {
                Row::new()
                    .with("id", id)
                    .with("name", CompositeCell::link(format!("Person {id}")))
                    .with("dob", date(2000, 1, 1))
                    .with("email", format!("p{id}@example.com"))
            })
            .collect()
    }

    fn grid_with(rows: Vec<Row>) -> DataGrid {
        let mut grid =
            DataGrid::initialize(GridOptions::all_columns(config())).expect("valid config");
        grid.set_data(rows);
        grid
    }

    fn visible_ids(grid: &DataGrid) -> Vec<usize> {
        grid.render().rows.iter().map(|r| r.source_index).collect()
    }

    #[test]
    fn rejects_dropdown_without_values() {
        let mut columns = config();
        columns.push(ColumnConfig::new("gender", "Gender", ColumnType::Dropdown));
        let err = DataGrid::initialize(GridOptions::all_columns(columns)).err();
        assert_eq!(err, Some(GridError::MissingDropdownValues("gender".to_string())));
    }

    #[test]
    fn rejects_unknown_column_references() {
        let options = GridOptions::new(config(), vec!["id".into(), "salary".into()]);
        assert_eq!(
            validate_options(&options),
            Err(GridError::UnknownDisplayedColumn("salary".to_string()))
        );

        let mut options = GridOptions::all_columns(config());
        options.search_option = Some(SearchOption::on_column("salary", "Search"));
        assert_eq!(
            validate_options(&options),
            Err(GridError::UnknownSearchColumn("salary".to_string()))
        );

        let mut options = GridOptions::all_columns(config());
        options.default_sort_column = Some(SortState::new("salary", SortDirection::Ascending));
        assert_eq!(
            validate_options(&options),
            Err(GridError::UnknownSortColumn("salary".to_string()))
        );

        let mut options = GridOptions::all_columns(config());
        options.search_option = Some(SearchOption::global("Search"));
        assert_eq!(validate_options(&options), Ok(()));
    }

    #[test]
    fn rejects_duplicate_columns_and_bad_page_sizes() {
        let mut columns = config();
        columns.push(ColumnConfig::new("id", "Again", ColumnType::Text));
        assert_eq!(
            validate_options(&GridOptions::all_columns(columns)),
            Err(GridError::DuplicateColumn("id".to_string()))
        );

        let mut options = GridOptions::all_columns(config());
        options.page_size_options = Vec::new();
        assert_eq!(validate_options(&options), Err(GridError::EmptyPageSizeOptions));

        options.page_size_options = vec![0, 5];
        assert_eq!(validate_options(&options), Err(GridError::InvalidPageSize(0)));
    }

    #[test]
    fn dropdown_with_values_is_accepted() {
        let mut columns = config();
        columns.push(
            ColumnConfig::new("gender", "Gender", ColumnType::Dropdown).with_dropdown_values(vec![
                DropdownValue::new("male", "Male"),
                DropdownValue::new("female", "Female"),
            ]),
        );
        assert!(DataGrid::initialize(GridOptions::all_columns(columns)).is_ok());
    }

    #[test]
    fn uninitialized_grid_is_loading_and_empty() {
        let grid = DataGrid::initialize(GridOptions::all_columns(config())).expect("valid config");
        let state = grid.render();
        assert!(state.is_loading);
        assert!(state.is_empty);
        assert!(!state.no_matches);
        assert_eq!(state.no_data_message, "N/A");
        assert_eq!(state.page_size_options, vec![5, 10, 20]);
        assert_eq!(state.page.page_size, 5);
    }

    #[test]
    fn empty_row_array_is_empty_but_not_loading() {
        let grid = grid_with(Vec::new());
        let state = grid.render();
        assert!(!state.is_loading);
        assert!(state.is_empty);
        assert!(!state.no_matches);
        assert!(state.rows.is_empty());
    }

    #[test]
    fn filter_without_matches_is_not_the_no_data_state() {
        let mut grid = grid_with(amy_and_bob()[..1].to_vec());
        grid.apply_filter("zzz");
        let state = grid.render();
        assert!(!state.is_loading);
        assert!(!state.is_empty, "rows were supplied");
        assert!(state.no_matches);
        assert_eq!(state.page.total_count, 0);

        grid.apply_filter("bob");
        assert!(!grid.render().no_matches);
    }

    #[test]
    fn sorting_by_composite_link_orders_amy_first() {
        let mut grid = grid_with(amy_and_bob());
        grid.toggle_sort("name");
        assert_eq!(visible_ids(&grid), vec![1, 0]);
    }

    #[test]
    fn sort_header_cycles_and_resets_page() {
        let mut grid = grid_with(numbered(12));
        grid.next_page();
        assert_eq!(grid.page_state().page_index, 1);

        grid.toggle_sort("id");
        assert_eq!(grid.page_state().page_index, 0);
        assert_eq!(grid.sort_state().map(|s| s.direction), Some(SortDirection::Ascending));

        grid.next_page();
        grid.toggle_sort("id");
        assert_eq!(grid.page_state().page_index, 0);
        assert_eq!(grid.sort_state().map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(visible_ids(&grid), vec![11, 10, 9, 8, 7]);

        grid.toggle_sort("id");
        assert_eq!(grid.sort_state().map(|s| s.direction), Some(SortDirection::None));
        assert_eq!(visible_ids(&grid), vec![0, 1, 2, 3, 4]);

        grid.toggle_sort("dob");
        assert_eq!(
            grid.sort_state().cloned(),
            Some(SortState::new("dob", SortDirection::Ascending))
        );
    }

    #[test]
    fn non_sortable_header_is_ignored() {
        let mut grid = grid_with(numbered(12));
        grid.next_page();
        grid.toggle_sort("email");
        assert_eq!(grid.sort_state(), None);
        assert_eq!(grid.page_state().page_index, 1);
    }

    #[test]
    fn default_sort_applies_once_rows_arrive() {
        let mut options = GridOptions::all_columns(config());
        options.default_sort_column = Some(SortState::new("dob", SortDirection::Descending));
        let mut grid = DataGrid::initialize(options).expect("valid config");
        grid.set_data(amy_and_bob());
        assert_eq!(visible_ids(&grid), vec![1, 0]);
    }

    #[test]
    fn filter_is_trimmed_lowercased_and_resets_page() {
        let mut grid = grid_with(numbered(12));
        grid.last_page();
        assert_eq!(grid.page_state().page_index, 2);

        grid.apply_filter("  PERSON 1 ");
        assert_eq!(grid.filter_text(), "person 1");
        assert_eq!(grid.page_state().page_index, 0);
        assert_eq!(visible_ids(&grid), vec![1, 10, 11]);
    }

    #[test]
    fn filtering_twice_is_idempotent_and_empty_filter_restores_all() {
        let mut grid = grid_with(numbered(12));
        grid.apply_filter("p1");
        let once = grid.render().page;
        grid.apply_filter("p1");
        assert_eq!(grid.render().page, once);

        grid.apply_filter("zzz");
        let state = grid.render();
        assert!(!state.is_empty);
        assert!(state.no_matches);
        assert!(state.rows.is_empty());

        grid.apply_filter("");
        assert_eq!(grid.page_state().total_count, 12);
    }

    #[test]
    fn two_column_search_matches_year() {
        let mut options = GridOptions::all_columns(config());
        options.search_option =
            Some(SearchOption::on_two_columns(&["name", "dob"], "Search").expect("two columns"));
        let mut grid = DataGrid::initialize(options).expect("valid config");
        grid.set_data(amy_and_bob());

        grid.apply_filter("2021");
        assert_eq!(visible_ids(&grid), vec![1]);
    }

    #[test]
    fn global_search_matches_values_not_field_names() {
        let mut options = GridOptions::all_columns(config());
        options.search_option = Some(SearchOption::global("Search"));
        let mut grid = DataGrid::initialize(options).expect("valid config");
        grid.set_data(amy_and_bob());

        grid.apply_filter("amy");
        assert_eq!(visible_ids(&grid), vec![1]);

        grid.apply_filter("link");
        assert!(grid.render().no_matches);
    }

    #[test]
    fn new_rows_keep_sort_and_clamp_page() {
        let mut grid = grid_with(numbered(12));
        grid.toggle_sort("id");
        grid.toggle_sort("id");
        grid.last_page();
        assert_eq!(grid.page_state().page_index, 2);

        grid.set_data(numbered(6));
        assert_eq!(grid.page_state().page_index, 1);
        assert_eq!(visible_ids(&grid), vec![0]);
        assert_eq!(
            grid.sort_state().map(|s| s.direction),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn page_size_change_keeps_first_row_visible() {
        let mut grid = grid_with(numbered(25));
        grid.set_page_index(3);
        assert_eq!(visible_ids(&grid), vec![15, 16, 17, 18, 19]);

        grid.set_page_size(10).expect("10 is an option");
        assert_eq!(grid.page_state().page_index, 1);
        assert_eq!(visible_ids(&grid).first(), Some(&10));

        assert_eq!(grid.set_page_size(7), Err(GridError::InvalidPageSize(7)));
    }

    #[test]
    fn paging_stops_at_both_ends() {
        let mut grid = grid_with(numbered(7));
        grid.previous_page();
        assert_eq!(grid.page_state().page_index, 0);
        grid.next_page();
        grid.next_page();
        assert_eq!(grid.page_state().page_index, 1);
        assert_eq!(visible_ids(&grid), vec![5, 6]);
        grid.set_page_index(99);
        assert_eq!(grid.page_state().page_index, 1);
        grid.first_page();
        assert_eq!(grid.page_state().page_index, 0);
    }

    #[test]
    fn row_interactions_emit_events_without_touching_state() {
        let mut grid = grid_with(amy_and_bob());
        grid.toggle_sort("name");
        let before = grid.render();

        assert!(grid.link_clicked(1));
        assert!(grid.selection_changed(0, "gender", "female"));
        assert!(grid.custom_action(1, "actions"));
        assert!(!grid.link_clicked(9));

        assert_eq!(grid.render(), before);
        let events = grid.drain_events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            GridEvent::SelectionChanged {
                source_index: 0,
                row: amy_and_bob()[0].clone(),
                column: "gender".to_string(),
                selected_value: "female".to_string(),
            }
        );
        assert!(grid.drain_events().is_empty());
    }

    #[test]
    fn malformed_rows_stay_interactive() {
        let mut broken = CompositeCell::link("Zed");
        broken.search_sort_field = None;
        let mut rows = amy_and_bob();
        rows.push(Row::new().with("id", 3_i64).with("name", broken));

        let mut grid = grid_with(rows);
        grid.toggle_sort("name");
        assert_eq!(visible_ids(&grid), vec![2, 1, 0]);

        grid.apply_filter("zed");
        assert!(grid.render().no_matches);
        grid.apply_filter("");
        assert_eq!(grid.page_state().total_count, 3);
    }

    #[test]
    fn scroll_height_and_displayed_column_order() {
        let mut options = GridOptions::new(config(), vec!["email".into(), "id".into()]);
        options.vertical_scroll_offset_in_rows = Some(4);
        let grid = DataGrid::initialize(options).expect("valid config");
        let state = grid.render();
        assert_eq!(state.scroll_max_height_px, Some(280));
        let names: Vec<&str> = state.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["email", "id"]);

        let mut options = GridOptions::all_columns(config());
        options.vertical_scroll_offset_in_rows = Some(0);
        let grid = DataGrid::initialize(options).expect("valid config");
        assert_eq!(grid.render().scroll_max_height_px, None);
    }

    #[test]
    fn display_text_per_cell_kind() {
        let grid = grid_with(Vec::new());
        assert_eq!(grid.display_text(&CellValue::Number(7.0)), "7");
        assert_eq!(grid.display_text(&CellValue::Date(date(2021, 6, 15))), "Jun 15, 2021");
        assert_eq!(
            grid.display_text(&CellValue::Composite(CompositeCell::link("Amy"))),
            "Amy"
        );
    }

    struct IsoFormatter;

    impl DateFormatter for IsoFormatter {
        fn format(&self, date: &NaiveDateTime) -> String {
            date.format("%Y-%m-%d").to_string()
        }
    }

    #[test]
    fn injected_formatter_drives_date_filtering() {
        let mut options = GridOptions::all_columns(config());
        options.search_option = Some(SearchOption::on_column("dob", "Search"));
        let mut grid = DataGrid::initialize(options)
            .expect("valid config")
            .with_date_formatter(Arc::new(IsoFormatter));
        grid.set_data(amy_and_bob());

        grid.apply_filter("2021-06");
        assert_eq!(visible_ids(&grid), vec![1]);
        grid.apply_filter("jun");
        assert!(grid.render().no_matches);
    }

    #[test]
    fn on_inputs_changed_returns_fresh_render_state() {
        let mut grid =
            DataGrid::initialize(GridOptions::all_columns(config())).expect("valid config");
        let state = grid.on_inputs_changed(Some(amy_and_bob()));
        assert_eq!(state.page.total_count, 2);
        assert!(!state.is_loading);

        let state = grid.on_inputs_changed(None);
        assert!(state.is_loading);
        assert!(state.is_empty);
    }
}
