//! Таблица заголовков полей: сырой ключ -> человекочитаемое название.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static FIELD_TITLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // параметры поиска
        ("fq", "Фильтры"),
        ("group_by", "Группировка"),
        ("sort", "Сортировка"),
        ("tc", "Период"),
        ("q", "Запрос"),
        // поля событий
        ("ts", "Время"),
        ("src_ip", "IP источника"),
        ("dst_ip", "IP назначения"),
        ("hostname", "Хост"),
        ("rule", "Правило"),
        ("severity", "Критичность"),
        ("verdict", "Вердикт"),
        ("tags", "Теги"),
        ("details", "Детали"),
    ])
});

/// Заголовок поля; неизвестные ключи показываются как есть
pub fn field_title(key: &str) -> &str {
    FIELD_TITLES.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_maps_to_title() {
        assert_eq!(field_title("fq"), "Фильтры");
        assert_eq!(field_title("src_ip"), "IP источника");
    }

    #[test]
    fn unknown_key_falls_back_to_raw_name() {
        assert_eq!(field_title("x_custom_field"), "x_custom_field");
    }
}
