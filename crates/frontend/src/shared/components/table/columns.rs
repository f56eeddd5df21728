//! Определение колонок таблицы по строкам произвольной формы.

use serde_json::{Map, Value};

/// Собирает упорядоченный список колонок: проход по строкам в исходном порядке,
/// ключ добавляется при первом появлении непустого значения. После прохода
/// список зафиксирован и используется и для заголовков, и для выборки ячеек.
///
/// Ключ, встречающийся только с null или пустой строкой, колонкой не становится.
/// Порядок ключей внутри строки — порядок самой строки (serde_json собран с
/// preserve_order ради этого).
pub fn discover_columns(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for row in rows {
        for (key, value) in row {
            if value.is_null() {
                continue;
            }
            if matches!(value, Value::String(s) if s.is_empty()) {
                continue;
            }
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("ожидался объект"),
        }
    }

    #[test]
    fn columns_in_first_seen_order_without_duplicates() {
        let rows = vec![
            row(json!({"a": 1, "b": 2})),
            row(json!({"b": 3, "c": 4})),
        ];
        assert_eq!(discover_columns(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn null_and_empty_values_do_not_create_columns() {
        let rows = vec![
            row(json!({"a": null})),
            row(json!({"a": ""})),
            row(json!({"a": "x"})),
        ];
        // колонка появляется только из третьей строки
        assert_eq!(discover_columns(&rows), vec!["a"]);

        let only_empty = vec![row(json!({"a": null})), row(json!({"a": ""}))];
        assert!(discover_columns(&only_empty).is_empty());
    }

    #[test]
    fn zero_rows_give_zero_columns() {
        assert!(discover_columns(&[]).is_empty());
    }

    #[test]
    fn false_and_zero_are_not_empty_values() {
        let rows = vec![row(json!({"flag": false, "count": 0}))];
        assert_eq!(discover_columns(&rows), vec!["flag", "count"]);
    }
}
