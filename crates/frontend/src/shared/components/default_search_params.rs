//! Диалог «параметры поиска по умолчанию».
//!
//! Показывает сохранённый и текущий наборы параметров, ограниченные ключами
//! `DEFAULT_PARAM_KEYS`, и позволяет сохранить текущий набор как набор по
//! умолчанию или сбросить сохранённый. Сравнение наборов идёт по каноническим
//! строкам запроса, не по структурному равенству.

use contracts::search::DEFAULT_PARAM_KEYS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::layout::notification_service::NotificationService;
use crate::shared::components::filters_selected::FiltersSelected;
use crate::shared::search::{DefaultParamsContext, SearchParamsContext};

/// Подсказка под кнопкой сохранения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveHint {
    /// Текущий набор уже совпадает с сохранённым
    AlreadyDefault,
    /// Текущий набор пуст
    NothingToSave,
    /// Сохранение перезапишет существующий набор
    WillOverwrite,
}

impl SaveHint {
    pub fn text(&self) -> &'static str {
        match self {
            SaveHint::AlreadyDefault => {
                "Текущие параметры уже совпадают с параметрами по умолчанию."
            }
            SaveHint::NothingToSave => "Нет параметров для сохранения.",
            SaveHint::WillOverwrite => {
                "Сохранение заменит параметры по умолчанию текущими."
            }
        }
    }
}

/// «Уже совпадает» проверяется раньше «нечего сохранять»: при двух пустых
/// наборах первое условие выигрывает.
pub fn save_hint(is_same_params: bool, current_is_empty: bool) -> SaveHint {
    if is_same_params {
        SaveHint::AlreadyDefault
    } else if current_is_empty {
        SaveHint::NothingToSave
    } else {
        SaveHint::WillOverwrite
    }
}

pub fn save_enabled(is_same_params: bool, current_is_empty: bool) -> bool {
    !current_is_empty && !is_same_params
}

pub fn clear_enabled(from_storage: bool) -> bool {
    from_storage
}

#[component]
pub fn DefaultSearchParams() -> impl IntoView {
    let search_ctx =
        use_context::<SearchParamsContext>().expect("SearchParamsContext not found in context");
    let defaults_ctx =
        use_context::<DefaultParamsContext>().expect("DefaultParamsContext not found in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let open = RwSignal::new(false);
    let is_same_params = RwSignal::new(false);

    let filtered_defaults =
        Memo::new(move |_| defaults_ctx.defaults.get().filter(&DEFAULT_PARAM_KEYS));
    let filtered_current = Memo::new(move |_| search_ctx.search.get().filter(&DEFAULT_PARAM_KEYS));

    // Сравнение пересчитывается только при открытом диалоге; при каждом
    // открытии обе стороны читаются заново, так как могли измениться пока
    // диалог был закрыт.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        is_same_params.set(
            filtered_current.get().to_query_string() == filtered_defaults.get().to_query_string(),
        );
    });

    let handle_clear = move |_| {
        defaults_ctx.on_default_clear();
        search_ctx.refresh_route();
        notifications.show_success("Параметры по умолчанию сброшены");
        open.set(false);
    };

    let handle_save = move |_| {
        // Сохраняется полный текущий набор; фильтр по DEFAULT_PARAM_KEYS
        // применяется только к сравнению и предпросмотру.
        defaults_ctx.on_default_change(&search_ctx.search.get_untracked());
        search_ctx.refresh_route();
        notifications.show_success("Параметры по умолчанию сохранены");
        open.set(false);
    };

    let handle_copy = move |_| {
        let text = filtered_current.get_untracked().to_query_string();
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                notifications.show_success("Строка запроса скопирована");
            }
        });
    };

    view! {
        <button
            class="button button--icon"
            title="Параметры поиска по умолчанию"
            on:click=move |_| open.set(true)
        >
            "⚙"
        </button>

        {move || {
            if !open.get() {
                return view! { <></> }.into_any();
            }
            view! {
                <div class="modal-overlay" on:click=move |_| open.set(false)>
                    <div class="modal" on:click=|e| e.stop_propagation()>
                        <div class="modal-header">
                            <h2 class="modal-title">"Параметры поиска по умолчанию"</h2>
                            <div class="modal-header-actions">
                                <button
                                    class="button button--icon"
                                    title="Копировать текущую строку запроса"
                                    on:click=handle_copy
                                >
                                    "⧉"
                                </button>
                                <button
                                    class="button button--icon modal__close"
                                    on:click=move |_| open.set(false)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                        <div class="modal-body default-params">
                            <div class="default-params__description">
                                "Сохранённый набор применяется вместо пустой строки запроса. \
                                 Учитываются только фильтры, группировка, сортировка и период."
                            </div>

                            <div class="default-params__panel">
                                <h3>"Сохранённые параметры"</h3>
                                {move || {
                                    let full_defaults = defaults_ctx.defaults.get();
                                    if filtered_defaults.get().is_empty() {
                                        view! { <div class="params-preview__empty">"нет"</div> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <FiltersSelected
                                                params=full_defaults
                                                visible=DEFAULT_PARAM_KEYS.to_vec()
                                            />
                                        }
                                        .into_any()
                                    }
                                }}
                            </div>

                            <div class="default-params__panel">
                                <h3>"Текущие параметры"</h3>
                                {move || {
                                    let full_current = search_ctx.search.get();
                                    if filtered_current.get().is_empty() {
                                        view! { <div class="params-preview__empty">"нет"</div> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <FiltersSelected
                                                params=full_current
                                                visible=DEFAULT_PARAM_KEYS.to_vec()
                                            />
                                        }
                                        .into_any()
                                    }
                                }}
                            </div>

                            <div class="default-params__hint">
                                {move || {
                                    if defaults_ctx.from_storage.get() {
                                        "Сброс удалит сохранённые параметры по умолчанию."
                                    } else {
                                        "Сохранённых параметров нет, сбрасывать нечего."
                                    }
                                }}
                            </div>

                            <div class="default-params__hint">
                                {move || {
                                    save_hint(
                                            is_same_params.get(),
                                            filtered_current.get().is_empty(),
                                        )
                                        .text()
                                }}
                            </div>
                        </div>
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || {
                                    !clear_enabled(defaults_ctx.from_storage.get())
                                })
                                on_click=handle_clear
                            >
                                "Сбросить"
                            </Button>
                            <div class="modal-footer__spacer"></div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| open.set(false)
                            >
                                "Отмена"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || {
                                    !save_enabled(
                                        is_same_params.get(),
                                        filtered_current.get().is_empty(),
                                    )
                                })
                                on_click=handle_save
                            >
                                "Сохранить"
                            </Button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::search::SearchParams;

    #[test]
    fn save_enabled_requires_nonempty_and_different() {
        // current = {fq: x}, defaults = {} -> сохранение доступно
        assert!(save_enabled(false, false));
        // пустой текущий набор -> недоступно
        assert!(!save_enabled(false, true));
        // наборы совпадают -> недоступно
        assert!(!save_enabled(true, false));
    }

    #[test]
    fn clear_enabled_only_with_stored_defaults() {
        assert!(clear_enabled(true));
        assert!(!clear_enabled(false));
    }

    #[test]
    fn already_default_wins_over_nothing_to_save() {
        // оба набора пусты: канонические строки равны, is_same = true
        assert_eq!(save_hint(true, true), SaveHint::AlreadyDefault);
    }

    #[test]
    fn hint_priority_order() {
        assert_eq!(save_hint(true, false), SaveHint::AlreadyDefault);
        assert_eq!(save_hint(false, true), SaveHint::NothingToSave);
        assert_eq!(save_hint(false, false), SaveHint::WillOverwrite);
    }

    #[test]
    fn same_params_follows_canonical_string_equality() {
        let current = SearchParams::parse("fq=x&offset=50");
        let defaults = SearchParams::parse("fq=x&rows=25");
        let same = current.filter(&DEFAULT_PARAM_KEYS).to_query_string()
            == defaults.filter(&DEFAULT_PARAM_KEYS).to_query_string();
        assert!(same);
        assert!(!save_enabled(same, current.filter(&DEFAULT_PARAM_KEYS).is_empty()));
    }
}
