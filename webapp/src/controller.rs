//! ==============================================================================
//! controller.rs - link submission controller
//! ==============================================================================
//!
//! purpose:
//!     owns the page state (submission flow, history, input field) and
//!     drives the state machine from ui events. components read phase and
//!     history reactively and call `submit` / `acknowledge`.
//!
//! relationships:
//!     - uses: shared (SubmissionFlow, History, short_url)
//!     - uses: api (the one network call)
//!     - used by: every component in components/
//!
//! design rationale:
//!     the controller is a bundle of Copy signal handles, so components
//!     receive it by value as a prop. the raw and short url travel inside
//!     the flow's phase, which keeps the dialog-close handler tied to the
//!     submission it confirms even though the network callback lands on a
//!     later turn of the event loop.
//!
//! ==============================================================================

use leptos::html::Input;
use leptos::prelude::*;

use shared::{short_url, History, Phase, SubmissionFlow};

use crate::api;
use crate::config::AppConfig;

#[derive(Clone, Copy)]
pub struct SubmissionController {
    config: StoredValue<AppConfig>,
    flow: RwSignal<SubmissionFlow>,
    history: RwSignal<History>,
    input: RwSignal<String>,
    input_ref: NodeRef<Input>,
}

impl SubmissionController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            flow: RwSignal::new(SubmissionFlow::new()),
            history: RwSignal::new(History::new()),
            input: RwSignal::new(String::new()),
            input_ref: NodeRef::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.flow.with(|flow| flow.phase().clone())
    }

    pub fn is_pending(&self) -> bool {
        self.flow.with(|flow| flow.phase().is_pending())
    }

    pub fn input(&self) -> RwSignal<String> {
        self.input
    }

    pub fn input_ref(&self) -> NodeRef<Input> {
        self.input_ref
    }

    pub fn history(&self) -> RwSignal<History> {
        self.history
    }

    /// submit the current input value. whatever the user typed goes to the
    /// service untouched; while a request is in flight the call is ignored
    /// (the submit button is also disabled then).
    pub fn submit(&self) {
        let raw_url = self.input.get_untracked();
        let begun = self
            .flow
            .try_update(|flow| flow.begin(raw_url.clone()))
            .unwrap_or(false);
        if !begun {
            return;
        }

        let controller = *self;
        leptos::task::spawn_local(async move {
            let endpoint = controller.config.with_value(|c| c.submit_endpoint.clone());
            match api::submit_link(&endpoint, &raw_url).await {
                Ok(resp) => {
                    let web_base = controller.config.with_value(|c| c.web_base.clone());
                    let link = short_url(&web_base, &resp.linky_url);
                    controller.flow.update(|flow| flow.resolve(link));
                }
                Err(e) => {
                    leptos::logging::error!("link submission failed: {}", e);
                    controller.flow.update(|flow| flow.fail());
                }
            }
        });
    }

    /// close the confirmation dialog: append the finished submission to the
    /// history, clear the input and hand focus back for the next one.
    pub fn acknowledge(&self) {
        let entry = self
            .flow
            .try_update(|flow| flow.acknowledge())
            .flatten();

        if let Some(entry) = entry {
            self.history.update(|history| history.push(entry));
            self.input.set(String::new());
            if let Some(input) = self.input_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    }
}
