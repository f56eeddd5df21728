use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сервис всплывающих уведомлений об успешных действиях
#[derive(Clone, Copy)]
pub struct NotificationService {
    pub message: RwSignal<Option<String>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Показать сообщение об успехе; исчезает через 3 секунды
    pub fn show_success(&self, text: impl Into<String>) {
        let message = self.message;
        message.set(Some(text.into()));

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            message.set(None);
        });
    }
}

/// Рендерит активное уведомление поверх страницы
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    view! {
        {move || {
            service.message.get().map(|text| {
                view! {
                    <div class="notification notification--success">{text}</div>
                }
            })
        }}
    }
}
