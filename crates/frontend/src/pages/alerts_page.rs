//! Страница ленты алертов.

use contracts::alerts::{AlertRecord, AlertStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api;
use crate::shared::components::default_search_params::DefaultSearchParams;
use crate::shared::components::table::DynamicTable;
use crate::shared::search::SearchParamsContext;

const VIEW_PREFS_KEY: &str = "alert_console.view_prefs";

/// Настройки отображения страницы, переживающие перезагрузку
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ViewPrefs {
    printable: bool,
}

fn load_view_prefs() -> ViewPrefs {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return ViewPrefs::default();
    };
    storage
        .get_item(VIEW_PREFS_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_view_prefs(prefs: ViewPrefs) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Ok(json) = serde_json::to_string(&prefs) {
        let _ = storage.set_item(VIEW_PREFS_KEY, &json);
    }
}

fn status_label(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Open => "открыт",
        AlertStatus::Triaged => "в работе",
        AlertStatus::Resolved => "закрыт",
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    let search_ctx =
        use_context::<SearchParamsContext>().expect("SearchParamsContext not found in context");

    let (alerts, set_alerts) = signal(Vec::<AlertRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let printable = RwSignal::new(load_view_prefs().printable);
    // Раскрытый алерт: таблица событий рендерится только для него
    let expanded = RwSignal::new(None::<Uuid>);

    // Перезагрузка ленты при каждом изменении параметров поиска
    Effect::new(move |_| {
        let params = search_ctx.search.get();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::alerts::fetch_alerts(&params).await {
                Ok(response) => {
                    set_alerts.set(response.items);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Ошибка загрузки алертов: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    });

    let toggle_printable = move |_| {
        printable.update(|p| *p = !*p);
        save_view_prefs(ViewPrefs {
            printable: printable.get_untracked(),
        });
    };

    view! {
        <div class="alerts-page">
            <div class="alerts-page__header">
                <h1>"Алерты"</h1>
                <div class="alerts-page__toolbar">
                    <label class="alerts-page__printable">
                        <input
                            type="checkbox"
                            prop:checked=move || printable.get()
                            on:change=toggle_printable
                        />
                        "Печатная версия"
                    </label>
                    <DefaultSearchParams />
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|text| view! { <div class="alerts-page__error">{text}</div> })
            }}

            {move || {
                if loading.get() {
                    return view! { <div class="alerts-page__loading">"Загрузка..."</div> }
                        .into_any();
                }
                let items = alerts.get();
                if items.is_empty() {
                    return view! { <div class="alerts-page__empty">"Алертов нет"</div> }
                        .into_any();
                }
                let cards = items
                    .into_iter()
                    .map(|alert| {
                        let id = alert.id;
                        let received = alert
                            .received_at
                            .with_timezone(&chrono::Local)
                            .format("%d.%m.%Y %H:%M")
                            .to_string();
                        let is_expanded = move || expanded.get() == Some(id);
                        let toggle = move |_| {
                            expanded.update(|e| {
                                *e = if *e == Some(id) { None } else { Some(id) };
                            });
                        };
                        let events = alert.events.clone();
                        view! {
                            <div class="alert-card">
                                <div class="alert-card__header" on:click=toggle>
                                    <span class="alert-card__label">{alert.label.clone()}</span>
                                    <span class="alert-card__priority">
                                        {alert.priority.label()}
                                    </span>
                                    <span class="alert-card__status">
                                        {status_label(alert.status)}
                                    </span>
                                    <span class="alert-card__received">{received}</span>
                                </div>
                                {move || {
                                    let rows = if is_expanded() {
                                        Some(events.clone())
                                    } else {
                                        None
                                    };
                                    view! {
                                        <DynamicTable rows=rows printable=printable.get() />
                                    }
                                }}
                            </div>
                        }
                    })
                    .collect_view();
                view! { <div class="alerts-page__list">{cards}</div> }.into_any()
            }}
        </div>
    }
}
