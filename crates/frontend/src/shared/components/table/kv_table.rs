//! Вложенная таблица ключ-значение для объектов внутри ячеек.

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::shared::components::table::cell_value::CellValue;
use crate::shared::search::field_title;

/// Плоский рендер объекта парами ключ-значение. Объекты глубже одного уровня
/// печатаются JSON-текстом.
#[component]
pub fn KvTable(body: Map<String, Value>) -> impl IntoView {
    let rows = body
        .iter()
        .map(|(key, value)| {
            let title = field_title(key).to_string();
            let text = match CellValue::classify(Some(value)) {
                CellValue::Nested(inner) => {
                    serde_json::to_string(&Value::Object(inner)).unwrap_or_default()
                }
                other => other.to_text().unwrap_or_default(),
            };
            view! {
                <tr>
                    <td class="kv-table__key">{title}</td>
                    <td class="kv-table__value">{text}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="kv-table">
            <tbody>{rows}</tbody>
        </table>
    }
}
