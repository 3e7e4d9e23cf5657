use common::grid::{DataGrid, GridRow};
use dioxus::prelude::*;

#[component]
pub fn TaskTable(grid: Signal<DataGrid>) -> Element {
    let grid = grid.read();
    let columns = grid
        .columns()
        .iter()
        .map(|column| (column.id.clone(), column.title.clone()))
        .collect::<Vec<_>>();
    let rows = grid
        .visible_rows()
        .into_iter()
        .map(|row| (row.get("id").cloned().unwrap_or_default(), row.clone()))
        .collect::<Vec<(String, GridRow)>>();
    let total = grid.rows().len();
    drop(grid);
    let shown = rows.len();

    rsx! {
        table {
            class: "x-task-table",
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    for (id, title) in columns.iter() {
                        th {
                            key: "{id}",
                            style: "text-align: left; padding: 8px; border-bottom: 1px solid #E2E8F0; color: #64748B; font-weight: 500;",
                            "{title}"
                        }
                    }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            colspan: "{columns.len()}",
                            style: "padding: 24px; text-align: center; color: #64748B;",
                            "No results."
                        }
                    }
                }
                for (row_id, row) in rows {
                    TaskRow { key: "{row_id}", row: row.clone(), columns: columns.clone() }
                }
            }
        }
        div {
            style: "padding: 8px; font-size: 13px; color: #64748B;",
            "{shown} of {total} row(s) shown."
        }
    }
}

#[component]
fn TaskRow(row: GridRow, columns: Vec<(String, String)>) -> Element {
    let label = row.get("label").cloned().unwrap_or_default();
    let cells = columns
        .iter()
        .map(|(id, _)| {
            let badge = if id.as_str() == "title" { label.clone() } else { String::new() };
            (id.clone(), badge, row.get(id).cloned().unwrap_or_default())
        })
        .collect::<Vec<_>>();
    rsx! {
        tr {
            for (id, badge, value) in cells {
                td {
                    key: "{id}",
                    style: "padding: 8px; border-bottom: 1px solid #F1F5F9;",
                    if !badge.is_empty() {
                        span {
                            style: "margin-right: 8px; padding: 1px 6px; border: 1px solid #E2E8F0; border-radius: 6px; font-size: 12px;",
                            "{badge}"
                        }
                    }
                    span {
                        style: "text-transform: capitalize;",
                        "{value}"
                    }
                }
            }
        }
    }
}
