//! Таблица с динамическими колонками для строк произвольной формы.

use leptos::prelude::*;
use serde_json::{Map, Value};
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use crate::shared::components::table::cell_value::CellValue;
use crate::shared::components::table::columns::discover_columns;
use crate::shared::components::table::kv_table::KvTable;
use crate::shared::search::field_title;

/// Рендерит строки произвольной формы таблицей.
///
/// `rows = None` — таблица не рендерится вовсе; пустой список строк даёт пустой
/// каркас (ноль колонок, ноль строк). Колонки определяются один раз по
/// объединению непустых ключей всех строк; строка без какого-то ключа получает
/// пустую ячейку.
#[component]
pub fn DynamicTable(
    rows: Option<Vec<Map<String, Value>>>,
    /// Печатная версия: таблица во всю ширину с переносом длинных слов;
    /// иначе — по содержимому, с ограниченной высотой и прокруткой
    #[prop(optional)]
    printable: bool,
) -> impl IntoView {
    let Some(rows) = rows else {
        return view! { <></> }.into_any();
    };

    let columns = discover_columns(&rows);

    let container_class = if printable {
        "dynamic-table dynamic-table--printable"
    } else {
        "dynamic-table dynamic-table--scrollable"
    };

    let header_cells = columns
        .iter()
        .map(|key| {
            let title = field_title(key).to_string();
            view! { <TableHeaderCell>{title}</TableHeaderCell> }
        })
        .collect_view();

    let body_rows = rows
        .iter()
        .map(|row| {
            let cells = columns
                .iter()
                .map(|key| {
                    let content = match CellValue::classify(row.get(key)) {
                        CellValue::Nested(map) => view! { <KvTable body=map /> }.into_any(),
                        other => {
                            let text = other.to_text().unwrap_or_default();
                            view! { <span>{text}</span> }.into_any()
                        }
                    };
                    view! {
                        <TableCell>
                            <TableCellLayout>{content}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view();
            view! { <TableRow>{cells}</TableRow> }
        })
        .collect_view();

    view! {
        <div class=container_class>
            <Table>
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>{body_rows}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}
