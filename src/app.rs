use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use log::{error, info, warn};
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::entities::cell::{CellValue, Row};
use crate::domain::entities::column::{Align, ColumnConfig, ColumnType, DropdownValue};
use crate::domain::entities::employee::{DOB, EMAIL, GENDER, ID, NAME, PHONE};
use crate::domain::entities::grid::{GridError, GridOptions, SearchOption};
use crate::domain::filter::PatternDateFormatter;
use crate::infra::import::{FileRowSource, SUPPORTED_EXTENSIONS};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::data_grid::GridView;
use crate::ui::state::app_state::{AppState, SelectionChange};
use crate::usecase::grid::{DataGrid, GridEvent};
use crate::usecase::services::employee_service::EmployeeService;

pub const DETAILS_COLUMN: &str = "details";
const SEARCH_LABEL: &str = "搜尋員工";

fn employee_search_option(config: &AppConfig) -> SearchOption {
    let columns: Vec<&str> = config.search_columns.iter().map(String::as_str).collect();
    let mut search = match columns.as_slice() {
        [] => SearchOption::global(SEARCH_LABEL),
        [column] => SearchOption::on_column(*column, SEARCH_LABEL),
        many => SearchOption::on_two_columns(many, SEARCH_LABEL)
            .unwrap_or_else(|_| SearchOption::global(SEARCH_LABEL)),
    };
    search
        .box_style
        .insert("min-width".to_string(), "320px".to_string());
    search
}

pub fn employee_grid_options(config: &AppConfig) -> GridOptions {
    let grid_config = vec![
        ColumnConfig::new(ID, "Id", ColumnType::Text).sortable(),
        ColumnConfig::new(NAME, "Name", ColumnType::Link).sortable(),
        ColumnConfig::new(GENDER, "Gender", ColumnType::Dropdown)
            .sortable()
            .with_dropdown_values(vec![
                DropdownValue::new("male", "Male"),
                DropdownValue::new("female", "Female"),
            ]),
        ColumnConfig::new(PHONE, "Phone", ColumnType::Text).sortable(),
        ColumnConfig::new(DOB, "DOB", ColumnType::Date)
            .sortable()
            .aligned(Align::Right),
        ColumnConfig::new(EMAIL, "Email", ColumnType::Text)
            .aligned(Align::Center)
            .styled("color", "#555"),
        ColumnConfig::new(DETAILS_COLUMN, "Details", ColumnType::CustomTemplate),
    ];

    let mut options = GridOptions::all_columns(grid_config);
    options.page_size_options = config.page_size_options.clone();
    options.vertical_scroll_offset_in_rows = config.vertical_scroll_offset_in_rows;
    options.no_data_message = config.no_data_message.clone();
    options.search_option = Some(employee_search_option(config));
    options
}

/// Employee grid with the configured date pattern, if it is usable.
pub fn build_employee_grid(config: &AppConfig) -> Result<DataGrid, GridError> {
    let grid = DataGrid::initialize(employee_grid_options(config))?;
    let Some(pattern) = config.date_format.as_deref() else {
        return Ok(grid);
    };
    match PatternDateFormatter::new(pattern) {
        Some(formatter) => Ok(grid.with_date_formatter(Arc::new(formatter))),
        None => {
            warn!("ignoring invalid date_format `{pattern}`");
            Ok(grid)
        }
    }
}

/// One-line description of an employee using the grid's cell formatting.
fn employee_summary(grid: &DataGrid, row: &Row) -> String {
    grid.columns()
        .iter()
        .filter_map(|column| {
            row.get(&column.name)
                .map(|cell| format!("{}: {}", column.label, grid.display_text(cell)))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

fn employee_name(row: &Row) -> String {
    match row.get(NAME) {
        Some(CellValue::Composite(cell)) => cell.link.clone(),
        Some(CellValue::Text(text)) => text.clone(),
        _ => "(未命名)".to_string(),
    }
}

fn load_employees(
    path: &Path,
    mut grid: Signal<Option<DataGrid>>,
    mut status: Signal<String>,
    mut busy: Signal<bool>,
) {
    *busy.write() = true;
    *status.write() = format!("正在載入 {}", path.display());

    let service = EmployeeService::new(Arc::new(FileRowSource::new(path)));
    match run_blocking("load employees", || service.get_employees()) {
        Ok(rows) => {
            let count = grid
                .write()
                .as_mut()
                .map(|grid| grid.on_inputs_changed(Some(rows)).page.total_count)
                .unwrap_or_default();
            *status.write() = format!("已載入 {count} 筆員工資料（{}）", service.source_name());
        }
        Err(err) => {
            *status.write() = format!("載入資料失敗：{err}");
        }
    }

    *busy.write() = false;
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let grid_config = config.clone();

    let AppState {
        grid,
        busy,
        mut status,
        mut selected_employee,
        mut selected_summary,
        mut gender_change,
    } = AppState::new(move || match build_employee_grid(&grid_config) {
        Ok(grid) => Some(grid),
        Err(err) => {
            error!("invalid employee grid config: {err}");
            None
        }
    });

    let config_for_init = config.clone();
    use_effect(move || {
        let path = match config_for_init.resolved_data_path() {
            Ok(path) => path,
            Err(err) => {
                *status.write() = format!("無法取得資料路徑：{err}");
                return;
            }
        };
        if path.exists() {
            load_employees(&path, grid, status, busy);
        } else {
            info!("no employee file at {}", path.display());
            *status.write() = format!("找不到 {}，請開啟員工資料檔", path.display());
        }
    });

    if grid.read().is_none() {
        return rsx! {
            div {
                p { "表格設定錯誤，請查看日誌。" }
            }
        };
    }

    let on_events = move |events: Vec<GridEvent>| {
        for event in events {
            match event {
                GridEvent::LinkClicked { row, .. } => {
                    let summary = grid
                        .read()
                        .as_ref()
                        .map(|g| employee_summary(g, &row))
                        .unwrap_or_default();
                    *selected_summary.write() = summary;
                    *selected_employee.write() = Some(row);
                }
                GridEvent::SelectionChanged {
                    row, selected_value, ..
                } => {
                    *gender_change.write() = Some(SelectionChange {
                        employee: employee_name(&row),
                        selected_value,
                    });
                }
                GridEvent::CustomAction { row, .. } => {
                    *status.write() = format!("檢視 {}", employee_name(&row));
                }
            }
        }
    };

    let selected_name = selected_employee().as_ref().map(employee_name);

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 0 12px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("員工資料", &SUPPORTED_EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "已取消開啟".to_string();
                            return;
                        };

                        load_employees(&file_path, grid, status, busy);
                    },
                    "開啟資料"
                }
                span { " {status}" }
            }

            GridView { grid, on_events }

            if let Some(name) = selected_name {
                div {
                    style: "padding: 8px; border-top: 1px solid #ddd;",
                    strong { "已選取：{name}" }
                    p { "{selected_summary}" }
                }
            }

            if let Some(change) = gender_change() {
                div {
                    style: "padding: 8px; border-top: 1px solid #ddd;",
                    "{change.employee} 的性別改為 {change.selected_value}"
                }
            }
        }
    }
}
