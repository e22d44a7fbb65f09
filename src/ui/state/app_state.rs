use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::cell::Row;
use crate::usecase::grid::DataGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub employee: String,
    pub selected_value: String,
}

pub struct AppState {
    pub grid: Signal<Option<DataGrid>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub selected_employee: Signal<Option<Row>>,
    pub selected_summary: Signal<String>,
    pub gender_change: Signal<Option<SelectionChange>>,
}

impl AppState {
    pub fn new(init_grid: impl FnOnce() -> Option<DataGrid>) -> Self {
        Self {
            grid: use_signal(init_grid),
            busy: use_signal(|| false),
            status: use_signal(|| "就緒".to_string()),
            selected_employee: use_signal(|| None::<Row>),
            selected_summary: use_signal(String::new),
            gender_change: use_signal(|| None::<SelectionChange>),
        }
    }
}
