//! Контекст текущего состояния поиска.

use contracts::search::SearchParams;
use leptos::prelude::*;
use web_sys::window;

use super::default_params_context::read_stored_defaults;

/// Живое состояние поиска, производное от адресной строки
#[derive(Clone, Copy)]
pub struct SearchParamsContext {
    pub search: RwSignal<SearchParams>,
}

impl SearchParamsContext {
    pub fn from_location() -> Self {
        Self {
            search: RwSignal::new(resolve_params()),
        }
    }

    /// Принудительное обновление маршрута после смены параметров по умолчанию:
    /// текущая запись истории заменяется на `pathname + hash` (эфемерное
    /// состояние навигации сбрасывается, путь и якорь сохраняются), после чего
    /// параметры поиска перечитываются заново.
    pub fn refresh_route(&self) {
        let Some(window) = window() else {
            return;
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let target = format!("{}{}", pathname, hash);

        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target));
        }

        self.search.set(resolve_params());
    }
}

/// Параметры из строки запроса; при пустой строке действует сохранённый набор
/// по умолчанию
fn resolve_params() -> SearchParams {
    let query = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params = SearchParams::parse(&query);
    if params.is_empty() {
        read_stored_defaults().unwrap_or_default()
    } else {
        params
    }
}
