use crate::pages::alerts_page::AlertsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <AlertsPage /> }>
                <Route path=path!("/") view=AlertsPage />
                <Route path=path!("/alerts") view=AlertsPage />
            </Routes>
        </Router>
    }
}
