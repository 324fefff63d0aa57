//! Interim content shown while a search is in flight.

use leptos::prelude::*;

/// Placeholder written into `#result-container` right after a search is issued.
#[component]
pub fn SearchPlaceholder(oid: String) -> impl IntoView {
    let heading = format!("Результаты поиска: {}", oid);
    view! {
        <h2>{heading}</h2>
        <p>"Информация о компании будет загружена здесь."</p>
        <div id="company-details"></div>
    }
}
