//! Relations table - one row per related entity with a known town.

use leptos::prelude::*;

use crate::types::RelationRecord;

/// Fixed-column table of relations.
///
/// Records without a town are skipped; the rest keep backend order.
/// The hits cell gets class `red` above `hits_threshold`.
#[component]
pub fn RelationsTable(relations: Vec<RelationRecord>, hits_threshold: u64) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Town"</th>
                    <th>"Hits"</th>
                    <th>"Median"</th>
                    <th>"A/B rating"</th>
                </tr>
            </thead>
            <tbody>
                {relations
                    .into_iter()
                    .filter(RelationRecord::is_visible)
                    .map(|rel| {
                        let hits_class = if rel.exceeds(hits_threshold) { "red" } else { "" };
                        let median = rel.median_text();
                        let rating = rel.rating_text();
                        view! {
                            <tr>
                                <td>{rel.title}</td>
                                <td>{rel.town.unwrap_or_default()}</td>
                                <td class=hits_class>{rel.hits}</td>
                                <td>{median}</td>
                                <td>{rating}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
