//! Контекст сохранённых «параметров поиска по умолчанию».
//!
//! Набор хранится в localStorage целиком (включая ключи вне `DEFAULT_PARAM_KEYS`) и
//! мутируется только явными действиями пользователя: сохранить или сбросить.
//! Потребители никогда не кешируют значение — после мутации оно перечитывается
//! через обновление маршрута.

use contracts::search::SearchParams;
use leptos::prelude::*;

const STORAGE_KEY: &str = "alert_console.default_search_params";

#[derive(Clone, Copy)]
pub struct DefaultParamsContext {
    pub defaults: RwSignal<SearchParams>,
    /// Есть ли сейчас сохранённый набор в localStorage
    pub from_storage: RwSignal<bool>,
}

impl DefaultParamsContext {
    /// Читает сохранённый набор из localStorage
    pub fn load() -> Self {
        let stored = read_stored_defaults();
        Self {
            from_storage: RwSignal::new(stored.is_some()),
            defaults: RwSignal::new(stored.unwrap_or_default()),
        }
    }

    /// Сохраняет `params` как новый набор по умолчанию.
    /// Сюда передаётся полный текущий набор, без фильтра по `DEFAULT_PARAM_KEYS`.
    pub fn on_default_change(&self, params: &SearchParams) {
        if let Some(storage) = local_storage() {
            match serde_json::to_string(params) {
                Ok(json) => {
                    let _ = storage.set_item(STORAGE_KEY, &json);
                }
                Err(e) => log::warn!("не удалось сериализовать параметры по умолчанию: {}", e),
            }
        }
        self.defaults.set(params.clone());
        self.from_storage.set(true);
    }

    /// Удаляет сохранённый набор
    pub fn on_default_clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
        self.defaults.set(SearchParams::new());
        self.from_storage.set(false);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Сохранённый набор, если он есть и читается
pub(crate) fn read_stored_defaults() -> Option<SearchParams> {
    let json = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(params) => Some(params),
        Err(e) => {
            log::warn!("повреждённые параметры по умолчанию в localStorage: {}", e);
            None
        }
    }
}
