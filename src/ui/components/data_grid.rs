use dioxus::prelude::*;
use log::warn;

use crate::domain::entities::cell::CellValue;
use crate::domain::entities::column::{ColumnType, DropdownValue, PresentationStyle};
use crate::domain::entities::grid::{SortDirection, SortState};
use crate::usecase::grid::{DataGrid, GridEvent, RenderState};

#[derive(Clone, Debug, PartialEq)]
struct CellView {
    column: String,
    column_type: ColumnType,
    align: &'static str,
    extra_style: String,
    text: String,
    description: Option<String>,
    dropdown_values: Vec<DropdownValue>,
}

#[derive(Clone, Debug, PartialEq)]
struct RowView {
    source_index: usize,
    cells: Vec<CellView>,
}

fn build_rows(grid: &DataGrid, state: &RenderState) -> Vec<RowView> {
    state
        .rows
        .iter()
        .map(|visible| RowView {
            source_index: visible.source_index,
            cells: state
                .columns
                .iter()
                .map(|column| {
                    let cell = visible.row.get(&column.name);
                    CellView {
                        column: column.name.clone(),
                        column_type: column.column_type,
                        align: column.align.as_css(),
                        extra_style: style_css(&column.style),
                        text: cell.map(|c| grid.display_text(c)).unwrap_or_default(),
                        description: match cell {
                            Some(CellValue::Composite(composite)) => composite.description.clone(),
                            _ => None,
                        },
                        dropdown_values: column.dropdown_values.clone().unwrap_or_default(),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Inline css for an opaque style payload.
fn style_css(style: &PresentationStyle) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{key}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sort_indicator(sort: Option<&SortState>, column: &str) -> &'static str {
    match sort {
        Some(state) if state.active == column => match state.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
            SortDirection::None => "",
        },
        _ => "",
    }
}

/// Applies `action` to the grid and forwards whatever events it queued.
fn dispatch(
    mut grid: Signal<Option<DataGrid>>,
    on_events: EventHandler<Vec<GridEvent>>,
    action: impl FnOnce(&mut DataGrid),
) {
    let events = {
        let mut guard = grid.write();
        let Some(grid) = guard.as_mut() else {
            return;
        };
        action(grid);
        grid.drain_events()
    };
    if !events.is_empty() {
        on_events.call(events);
    }
}

fn render_cell(
    cell: CellView,
    source_index: usize,
    grid: Signal<Option<DataGrid>>,
    on_events: EventHandler<Vec<GridEvent>>,
) -> Element {
    let CellView {
        column,
        column_type,
        align,
        extra_style,
        text,
        description,
        dropdown_values,
    } = cell;
    let cell_style = format!(
        "padding: 6px 10px; border-bottom: 1px solid #eee; text-align: {align}; {extra_style}"
    );

    match column_type {
        ColumnType::Text | ColumnType::Date => rsx! {
            td { style: "{cell_style}", "{text}" }
        },
        ColumnType::Link | ColumnType::LinkAndDescription => rsx! {
            td {
                style: "{cell_style}",
                a {
                    style: "color: #1a5fb4; cursor: pointer; text-decoration: underline;",
                    onclick: move |_| dispatch(grid, on_events, |g| {
                        g.link_clicked(source_index);
                    }),
                    "{text}"
                }
                if let Some(description) = description {
                    div { style: "color: #777; font-size: 12px;", "{description}" }
                }
            }
        },
        ColumnType::Dropdown => rsx! {
            td {
                style: "{cell_style}",
                select {
                    value: "{text}",
                    onchange: move |event| {
                        let value = event.value();
                        dispatch(grid, on_events, |g| {
                            g.selection_changed(source_index, &column, value);
                        });
                    },
                    {dropdown_values.iter().map(|option| {
                        let selected = option.value == text;
                        rsx!(
                            option {
                                value: "{option.value}",
                                selected: selected,
                                "{option.view_value}"
                            }
                        )
                    })}
                }
            }
        },
        ColumnType::Icon => rsx! {
            td {
                style: "{cell_style}",
                span { class: "material-icons", title: "{text}", "{text}" }
            }
        },
        ColumnType::CustomTemplate => rsx! {
            td {
                style: "{cell_style}",
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 2px 8px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| dispatch(grid, on_events, |g| {
                        g.custom_action(source_index, &column);
                    }),
                    if text.is_empty() { "…" } else { "{text}" }
                }
            }
        },
    }
}

#[component]
pub fn GridView(
    grid: Signal<Option<DataGrid>>,
    on_events: EventHandler<Vec<GridEvent>>,
) -> Element {
    let Some((state, rows)) = grid.read().as_ref().map(|g| {
        let state = g.render();
        let rows = build_rows(g, &state);
        (state, rows)
    }) else {
        return rsx! {};
    };

    let table_style = match state.scroll_max_height_px {
        Some(height) => format!("max-height: {height}px; overflow-y: auto;"),
        None => String::new(),
    };
    let column_count = state.columns.len().max(1);
    let page = state.page;
    let range_label = page.range_label();
    let filter = state.filter.clone();
    let box_style = state
        .search
        .as_ref()
        .map(|search| style_css(&search.box_style))
        .unwrap_or_default();

    rsx! {
        div {
            if let Some(search) = state.search.clone() {
                div {
                    style: "padding: 8px 0;",
                    input {
                        r#type: "search",
                        placeholder: "{search.label}",
                        value: "{filter}",
                        style: "padding: 4px 8px; min-width: 260px; {box_style}",
                        oninput: move |event| {
                            let text = event.value();
                            dispatch(grid, on_events, |g| g.apply_filter(&text));
                        },
                    }
                }
            }

            div {
                style: "{table_style}",
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            {state.columns.iter().map(|column| {
                                let name = column.name.clone();
                                let label = column.label.clone();
                                let indicator = sort_indicator(state.sort.as_ref(), &column.name);
                                let cursor = if column.sort { "pointer" } else { "default" };
                                let align = column.align.as_css();
                                let extra_style = style_css(&column.style);
                                rsx!(
                                    th {
                                        style: "position: sticky; top: 0; background: #f6f6f6; padding: 6px 10px; text-align: {align}; cursor: {cursor}; user-select: none; {extra_style}",
                                        onclick: move |_| dispatch(grid, on_events, |g| g.toggle_sort(&name)),
                                        "{label}{indicator}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if state.is_empty {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: "padding: 12px; text-align: center; color: #777;",
                                    if state.is_loading { "載入中…" } else { "{state.no_data_message}" }
                                }
                            }
                        } else if state.no_matches {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: "padding: 12px; text-align: center; color: #777;",
                                    "沒有符合「{filter}」的資料"
                                }
                            }
                        }
                        {rows.into_iter().map(|row| {
                            let source_index = row.source_index;
                            rsx!(
                                tr {
                                    key: "{source_index}",
                                    {row.cells.into_iter().map(|cell| render_cell(cell, source_index, grid, on_events))}
                                }
                            )
                        })}
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; justify-content: flex-end; padding: 8px 0;",
                span { "每頁筆數" }
                select {
                    value: "{page.page_size}",
                    onchange: move |event| {
                        let Ok(size) = event.value().parse::<usize>() else {
                            return;
                        };
                        dispatch(grid, on_events, |g| {
                            if let Err(err) = g.set_page_size(size) {
                                warn!("{err}");
                            }
                        });
                    },
                    {state.page_size_options.iter().map(|size| {
                        let size = *size;
                        rsx!(option { value: "{size}", selected: size == page.page_size, "{size}" })
                    })}
                }
                span { "{range_label}" }
                button {
                    disabled: !page.has_previous(),
                    onclick: move |_| dispatch(grid, on_events, |g| g.first_page()),
                    "«"
                }
                button {
                    disabled: !page.has_previous(),
                    onclick: move |_| dispatch(grid, on_events, |g| g.previous_page()),
                    "‹"
                }
                button {
                    disabled: !page.has_next(),
                    onclick: move |_| dispatch(grid, on_events, |g| g.next_page()),
                    "›"
                }
                button {
                    disabled: !page.has_next(),
                    onclick: move |_| dispatch(grid, on_events, |g| g.last_page()),
                    "»"
                }
            }
        }
    }
}
