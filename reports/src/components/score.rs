//! Score parameters list.

use leptos::prelude::*;

use crate::types::ScoreEntry;

/// `key: value` list of whatever score parameters the backend sent.
#[component]
pub fn ScoreList(entries: Vec<ScoreEntry>) -> impl IntoView {
    view! {
        <div class="score-container">
            <h3>"Score Parameters"</h3>
            <ul>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let key = format!("{}:", entry.key);
                        let value = format!(" {}", entry.value);
                        view! { <li><b>{key}</b>{value}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
