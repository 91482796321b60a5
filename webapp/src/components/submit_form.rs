//! Submission form component

use leptos::prelude::*;

use crate::controller::SubmissionController;

#[component]
pub fn SubmitForm(controller: SubmissionController) -> impl IntoView {
    let input = controller.input();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller.submit();
    };

    view! {
        <form class="submit-form" on:submit=on_submit>
            <div class="input-group">
                <input
                    type="text"
                    placeholder="http://example.com/a/link/worth/keeping"
                    node_ref=controller.input_ref()
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || controller.is_pending()>
                    {move || if controller.is_pending() {
                        view! { <span class="spinner"></span> " Creating..." }.into_any()
                    } else {
                        view! { "Create Linky" }.into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
