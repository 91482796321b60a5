//! History list component

use leptos::prelude::*;

use crate::controller::SubmissionController;

#[component]
pub fn HistoryList(controller: SubmissionController) -> impl IntoView {
    let history = controller.history();

    view! {
        // fades in with the first entry and stays visible for the session
        <div class=move || if history.with(|h| h.is_empty()) { "card history" } else { "card history visible" }>
            <h2>"History"</h2>
            <table class="history-table">
                <thead>
                    <tr>
                        <th>"Linky"</th>
                        <th>"Original"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || history.with(|h| h.entries().iter().map(|entry| {
                        let short_href = entry.short_url.clone();
                        let short_text = entry.short_url.clone();
                        let raw_href = entry.raw_url.clone();
                        let raw_text = entry.raw_url.clone();
                        view! {
                            <tr>
                                <td><a href=short_href target="_blank">{short_text}</a></td>
                                <td><a href=raw_href>{raw_text}</a></td>
                            </tr>
                        }
                    }).collect::<Vec<_>>())}
                </tbody>
            </table>
        </div>
    }
}
