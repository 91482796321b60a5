//! Result card component

use leptos::prelude::*;

use shared::Phase;

use crate::controller::SubmissionController;

/// shown in the preview slot until the real capture is ready
const PLACEHOLDER_PREVIEW: &str = "static/img/preview-loading.png";

#[component]
pub fn ResultCard(controller: SubmissionController) -> impl IntoView {
    view! {
        <div class=move || if controller.is_pending() { "card result-panel centered" } else { "card result-panel" }>
            {move || match controller.phase() {
                Phase::Idle => view! {
                    <p class="hint">"Your short link will appear here."</p>
                }.into_any(),
                Phase::Pending { .. } => view! {
                    <div class="result pending">
                        <span class="spinner"></span>
                        <img class="preview" src=PLACEHOLDER_PREVIEW alt="preview pending" />
                    </div>
                }.into_any(),
                Phase::Resolved { short_url, .. } => {
                    let link_href = short_url.clone();
                    let link_text = short_url.clone();
                    view! {
                        <div class="result success">
                            <div class="result-label">"Your linky"</div>
                            <div class="result-value">
                                <a href=link_href target="_blank">{link_text}</a>
                            </div>
                            <img class="preview" src=short_url alt="link preview" />
                        </div>
                    }.into_any()
                },
                Phase::Failed { .. } => view! {
                    <div class="result error">
                        <div class="result-label">"Error"</div>
                        <div class="result-value">
                            "The link could not be created. Please try again."
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
