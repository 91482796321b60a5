//! ==============================================================================
//! lib.rs - Linky Web Client
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the linky link-shortening service.
//!     captures a url from the submission form, sends it to the service,
//!     and shows the resulting short link plus a session history of past
//!     submissions.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the link service via fetch
//!     - all page state is owned by one SubmissionController
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;
mod controller;

use components::{ConfirmDialog, Header, HistoryList, ResultCard, SubmitForm};
use config::AppConfig;
use controller::SubmissionController;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // one controller instance owns the whole submission flow
    let controller = SubmissionController::new(AppConfig::from_window());

    view! {
        <Title text="Linky" />
        <Header />
        <div class="container">
            <SubmitForm controller=controller />
            <ResultCard controller=controller />
            <ConfirmDialog controller=controller />
            <HistoryList controller=controller />
        </div>
    }
}
