//! Confirmation dialog component

use leptos::prelude::*;

use shared::Phase;

use crate::controller::SubmissionController;

/// modal shown once the service has answered. closing it is what appends
/// the submission to the history, so the dialog only exists while the flow
/// is resolved - it cannot be confirmed twice.
#[component]
pub fn ConfirmDialog(controller: SubmissionController) -> impl IntoView {
    let resolved_link = move || match controller.phase() {
        Phase::Resolved { short_url, .. } => Some(short_url),
        _ => None,
    };

    view! {
        {move || resolved_link().map(|link| view! {
            <div class="modal-overlay">
                <div class="modal">
                    <h2>"Linky created"</h2>
                    <p class="modal-link">{link}</p>
                    <button
                        class="modal-confirm"
                        on:click=move |ev| {
                            ev.prevent_default();
                            controller.acknowledge();
                        }
                    >
                        "Got it"
                    </button>
                </div>
            </div>
        })}
    }
}
