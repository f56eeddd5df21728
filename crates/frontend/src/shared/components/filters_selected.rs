//! Read-only отображение набора параметров поиска.

use contracts::search::{ParamValue, SearchParams};
use leptos::prelude::*;

use crate::shared::search::field_title;

/// Показывает пары параметров из `params`, ограниченные ключами `visible`,
/// в виде строк «заголовок: значения». Только для чтения.
#[component]
pub fn FiltersSelected(params: SearchParams, visible: Vec<&'static str>) -> impl IntoView {
    let pairs = params.filter(&visible).display_pairs();

    let rows = pairs
        .into_iter()
        .map(|(key, value)| {
            let title = field_title(&key).to_string();
            let values = match value {
                ParamValue::Single(v) => vec![v],
                ParamValue::Multi(vs) => vs,
            };
            let badges = values
                .into_iter()
                .map(|v| view! { <span class="filter-row__badge">{v}</span> })
                .collect_view();
            view! {
                <div class="filter-row">
                    <span class="filter-row__title">{title}</span>
                    <span class="filter-row__values">{badges}</span>
                </div>
            }
        })
        .collect_view();

    view! { <div class="filters-selected">{rows}</div> }
}
