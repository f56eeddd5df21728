use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::AppRoutes;
use crate::shared::search::{DefaultParamsContext, SearchParamsContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сохранённые параметры по умолчанию читаются из localStorage один раз
    // при старте; дальше ими владеет контекст.
    let defaults = DefaultParamsContext::load();
    provide_context(defaults);

    // Текущее состояние поиска: строка запроса, при пустой строке — defaults.
    provide_context(SearchParamsContext::from_location());

    provide_context(NotificationService::new());

    view! {
        <NotificationHost />
        <AppRoutes />
    }
}
