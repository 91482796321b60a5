//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Linky"</h1>
                <p class="subtitle">"Short links that keep working"</p>
            </div>
        </header>
    }
}
