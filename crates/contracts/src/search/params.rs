//! Параметры поиска: упорядоченный набор пар `ключ=значение` из строки запроса.
//!
//! Набор хранит пары в порядке появления (как URLSearchParams), один ключ может
//! встречаться несколько раз (`fq`). Сериализация в строку запроса детерминированная
//! и используется как каноническая форма для сравнения наборов.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ключи, участвующие в механизме «параметров поиска по умолчанию».
/// Все остальные параметры этим механизмом игнорируются.
pub const DEFAULT_PARAM_KEYS: [&str; 4] = ["fq", "group_by", "sort", "tc"];

/// Значение параметра после группировки повторяющихся ключей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParamValue {
    /// Все значения параметра в порядке появления
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(v) => vec![v.as_str()],
            ParamValue::Multi(vs) => vs.iter().map(|v| v.as_str()).collect(),
        }
    }
}

/// Упорядоченный набор параметров поиска
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    entries: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Разбирает строку запроса (ведущий `?` допустим). Нечитаемые
    /// percent-последовательности оставляются как есть, `+` читается как пробел.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut entries = Vec::new();

        for part in query.split('&') {
            if part.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = match part.split_once('=') {
                Some((k, v)) => (k, v),
                None => (part, ""),
            };
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);
            if key.is_empty() {
                continue;
            }
            entries.push((key, value));
        }

        Self { entries }
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Первое значение ключа
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Все значения ключа в порядке появления
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Оставляет только пары с ключами из `keys`, сохраняя относительный порядок
    pub fn filter(&self, keys: &[&str]) -> SearchParams {
        SearchParams {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Каноническая строка запроса: percent-кодированные пары в порядке хранения.
    /// Пустой набор даёт пустую строку. Два набора считаются равными для UI
    /// тогда и только тогда, когда их канонические строки совпадают.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Пары для отображения: повторяющиеся ключи сгруппированы в `Multi`
    /// в порядке первого появления ключа
    pub fn display_pairs(&self) -> Vec<(String, ParamValue)> {
        let mut pairs: Vec<(String, ParamValue)> = Vec::new();

        for (key, value) in &self.entries {
            match pairs.iter_mut().find(|(k, _)| k == key) {
                Some((_, slot)) => {
                    let taken = std::mem::replace(slot, ParamValue::Multi(Vec::new()));
                    let mut values = match taken {
                        ParamValue::Single(first) => vec![first],
                        ParamValue::Multi(vs) => vs,
                    };
                    values.push(value.clone());
                    *slot = ParamValue::Multi(values);
                }
                None => pairs.push((key.clone(), ParamValue::Single(value.clone()))),
            }
        }

        pairs
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_entry_order_and_repeats() {
        let params = SearchParams::parse("?fq=status:open&sort=ts+desc&fq=priority:high");
        let entries: Vec<_> = params.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("fq", "status:open"),
                ("sort", "ts desc"),
                ("fq", "priority:high"),
            ]
        );
    }

    #[test]
    fn parse_skips_empty_segments() {
        let params = SearchParams::parse("&&fq=x&");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("fq"), Some("x"));
    }

    #[test]
    fn filter_keeps_allow_listed_keys_in_order() {
        let params = SearchParams::parse("q=hello&fq=a&offset=25&group_by=file&fq=b");
        let filtered = params.filter(&DEFAULT_PARAM_KEYS);
        let entries: Vec<_> = filtered.entries().collect();
        assert_eq!(entries, vec![("fq", "a"), ("group_by", "file"), ("fq", "b")]);
    }

    #[test]
    fn canonical_equality_ignores_keys_outside_allow_list() {
        let a = SearchParams::parse("q=one&fq=x&sort=ts&offset=0");
        let b = SearchParams::parse("fq=x&q=two&sort=ts&rows=50");
        assert_eq!(
            a.filter(&DEFAULT_PARAM_KEYS).to_query_string(),
            b.filter(&DEFAULT_PARAM_KEYS).to_query_string()
        );
    }

    #[test]
    fn canonical_string_detects_value_difference() {
        let a = SearchParams::parse("fq=x");
        let b = SearchParams::parse("fq=y");
        assert_ne!(a.to_query_string(), b.to_query_string());
    }

    #[test]
    fn empty_sets_have_equal_canonical_strings() {
        let a = SearchParams::new();
        let b = SearchParams::parse("");
        assert_eq!(a.to_query_string(), b.to_query_string());
        assert_eq!(a.to_query_string(), "");
        assert!(a.is_empty());
    }

    #[test]
    fn query_string_roundtrip_with_special_chars() {
        let mut params = SearchParams::new();
        params.append("fq", "label:\"high risk\"");
        params.append("tc", "4d");
        let serialized = params.to_query_string();
        let reparsed = SearchParams::parse(&serialized);
        assert_eq!(reparsed, params);
    }

    #[test]
    fn display_pairs_group_repeated_keys() {
        let params = SearchParams::parse("fq=a&sort=ts&fq=b");
        let pairs = params.display_pairs();
        assert_eq!(
            pairs,
            vec![
                (
                    "fq".to_string(),
                    ParamValue::Multi(vec!["a".to_string(), "b".to_string()])
                ),
                ("sort".to_string(), ParamValue::Single("ts".to_string())),
            ]
        );
    }
}
