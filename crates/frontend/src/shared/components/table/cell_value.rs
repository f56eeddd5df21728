//! Классификация и приведение значений ячеек к отображаемому виду.
//!
//! Строки таблицы приходят произвольной формы, поэтому вместо проверок типов
//! по месту значение один раз классифицируется в тегированный вариант, а
//! рендер исчерпывающе разбирает варианты.

use serde_json::{Map, Value};

/// Значение ячейки после классификации
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// null или отсутствующий в строке ключ
    Blank,
    Bool(bool),
    Text(String),
    List(Vec<String>),
    /// Вложенный объект; рендерится вложенной таблицей ключ-значение
    Nested(Map<String, Value>),
}

impl CellValue {
    pub fn classify(value: Option<&Value>) -> CellValue {
        match value {
            None | Some(Value::Null) => CellValue::Blank,
            Some(Value::Bool(b)) => CellValue::Bool(*b),
            Some(Value::String(s)) => CellValue::Text(s.clone()),
            Some(Value::Number(n)) => CellValue::Text(n.to_string()),
            Some(Value::Array(items)) => {
                CellValue::List(items.iter().map(scalar_text).collect())
            }
            Some(Value::Object(map)) => CellValue::Nested(map.clone()),
        }
    }

    /// Текстовая форма для всех вариантов, кроме `Nested`
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Blank => Some(String::new()),
            CellValue::Bool(true) => Some("true".to_string()),
            CellValue::Bool(false) => Some("false".to_string()),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::List(items) => Some(items.join(" | ")),
            CellValue::Nested(_) => None,
        }
    }
}

/// Текст элемента списка; неожиданные вложенные формы печатаются как JSON,
/// а не роняют рендер
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_joins_items_with_pipe_separator() {
        let value = json!(["x", "y", "z"]);
        let cell = CellValue::classify(Some(&value));
        assert_eq!(cell.to_text().as_deref(), Some("x | y | z"));
    }

    #[test]
    fn booleans_render_as_literal_text() {
        let t = json!(true);
        let f = json!(false);
        assert_eq!(
            CellValue::classify(Some(&t)).to_text().as_deref(),
            Some("true")
        );
        assert_eq!(
            CellValue::classify(Some(&f)).to_text().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn null_and_missing_render_blank() {
        let null = json!(null);
        assert_eq!(
            CellValue::classify(Some(&null)).to_text().as_deref(),
            Some("")
        );
        assert_eq!(CellValue::classify(None).to_text().as_deref(), Some(""));
    }

    #[test]
    fn numbers_render_as_literal_text() {
        let int = json!(42);
        let float = json!(2.5);
        assert_eq!(
            CellValue::classify(Some(&int)).to_text().as_deref(),
            Some("42")
        );
        assert_eq!(
            CellValue::classify(Some(&float)).to_text().as_deref(),
            Some("2.5")
        );
    }

    #[test]
    fn objects_classify_as_nested_without_text_form() {
        let value = json!({"inner": "v"});
        let cell = CellValue::classify(Some(&value));
        assert!(matches!(cell, CellValue::Nested(_)));
        assert_eq!(cell.to_text(), None);
    }

    #[test]
    fn mixed_list_items_fall_back_to_json_text() {
        let value = json!(["a", 1, true]);
        let cell = CellValue::classify(Some(&value));
        assert_eq!(cell.to_text().as_deref(), Some("a | 1 | true"));
    }
}
