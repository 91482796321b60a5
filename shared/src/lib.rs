//! ==============================================================================
//! lib.rs - shared types for the linky submission flow
//! ==============================================================================
//!
//! purpose:
//!     defines the wire types exchanged with the link service and the
//!     client-side submission state machine that sequences one request at
//!     a time through spinner, result, confirmation and history append.
//!
//! relationships:
//!     - used by: webapp (api client, submission controller, components)
//!
//! design rationale:
//!     the raw and short urls travel inside the phase enum, so every
//!     transition hands the next step the exact submission it belongs to -
//!     the response callback and the dialog-close handler can never
//!     disagree about which submission they are looking at. the machine
//!     holds no browser types, so it tests off-wasm.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// wire types
// ==============================================================================

/// body of the shorten call. the service takes a single form-encoded `url`
/// field carrying whatever the user typed - the server decides what is a url.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub url: String,
}

impl SubmitRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// encode as an `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        serde_urlencoded::to_string(self).unwrap()
    }
}

/// json answer from the service. `linky_url` is only the assigned suffix;
/// the client glues it onto the configured web base.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub linky_url: String,
}

/// build the user-facing short url from the configured base and the
/// server-assigned suffix. plain concatenation - the base carries its own
/// trailing slash (or not), nothing is normalized here.
pub fn short_url(web_base: &str, suffix: &str) -> String {
    format!("{}{}", web_base, suffix)
}

// ==============================================================================
// submission flow
// ==============================================================================

/// where a submission currently stands.
///
/// the confirmation dialog is rendered exactly while the flow is `Resolved`,
/// so there is no separate dialog state to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending { raw_url: String },
    Resolved { raw_url: String, short_url: String },
    Failed { raw_url: String },
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending { .. })
    }
}

/// single-submission state machine.
///
/// transitions are gated on completion signals: a response callback can only
/// act on the request it answers, and the dialog close can only fire once
/// per resolved submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFlow {
    phase: Phase,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// start a new request cycle with the given raw url.
    ///
    /// returns false (state unchanged) while a request is already in
    /// flight - overlapping submissions are rejected, not queued.
    pub fn begin(&mut self, raw_url: String) -> bool {
        if self.phase.is_pending() {
            return false;
        }
        self.phase = Phase::Pending { raw_url };
        true
    }

    /// record a successful response. ignored outside of `Pending` so a
    /// stale callback cannot clobber a newer cycle.
    pub fn resolve(&mut self, short_url: String) {
        if let Phase::Pending { raw_url } = &self.phase {
            self.phase = Phase::Resolved {
                raw_url: raw_url.clone(),
                short_url,
            };
        }
    }

    /// record a failed response. ignored outside of `Pending`.
    pub fn fail(&mut self) {
        if let Phase::Pending { raw_url } = &self.phase {
            self.phase = Phase::Failed {
                raw_url: raw_url.clone(),
            };
        }
    }

    /// close the confirmation dialog, yielding the entry to append to the
    /// history. only a resolved submission produces an entry; anything else
    /// returns `None` and leaves the phase alone.
    pub fn acknowledge(&mut self) -> Option<HistoryEntry> {
        if let Phase::Resolved { raw_url, short_url } = &self.phase {
            let entry = HistoryEntry {
                short_url: short_url.clone(),
                raw_url: raw_url.clone(),
            };
            self.phase = Phase::Idle;
            return Some(entry);
        }
        None
    }
}

// ==============================================================================
// history
// ==============================================================================

/// one past submission: the short link and the url it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub short_url: String,
    pub raw_url: String,
}

/// append-only record of the session's submissions, oldest first.
/// lives only as long as the page - nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_carries_url_verbatim() {
        let body = SubmitRequest::new("example.com").to_form_body();
        assert_eq!(body, "url=example.com");
    }

    #[test]
    fn test_form_body_escapes_reserved_characters() {
        let body = SubmitRequest::new("a b&c=d").to_form_body();
        assert_eq!(body, "url=a+b%26c%3Dd");
    }

    #[test]
    fn test_form_body_accepts_empty_and_non_url_input() {
        // no client-side validation: anything goes through as-is
        assert_eq!(SubmitRequest::new("").to_form_body(), "url=");
        assert_eq!(
            SubmitRequest::new("not a url").to_form_body(),
            "url=not+a+url"
        );
    }

    #[test]
    fn test_response_decodes_suffix_field() {
        let resp: SubmitResponse = serde_json::from_str(r#"{"linky_url": "abc123"}"#).unwrap();
        assert_eq!(resp.linky_url, "abc123");
    }

    #[test]
    fn test_short_url_is_exact_concatenation() {
        assert_eq!(short_url("http://short.ly/", "abc123"), "http://short.ly/abc123");
        // no separator is invented when the base lacks one
        assert_eq!(short_url("http://short.ly", "abc123"), "http://short.lyabc123");
    }

    #[test]
    fn test_begin_moves_idle_to_pending() {
        let mut flow = SubmissionFlow::new();
        assert!(flow.begin("example.com".to_string()));
        assert_eq!(
            flow.phase(),
            &Phase::Pending {
                raw_url: "example.com".to_string()
            }
        );
    }

    #[test]
    fn test_begin_rejected_while_request_in_flight() {
        let mut flow = SubmissionFlow::new();
        assert!(flow.begin("first.com".to_string()));
        assert!(!flow.begin("second.com".to_string()));
        // the in-flight submission is untouched
        assert_eq!(
            flow.phase(),
            &Phase::Pending {
                raw_url: "first.com".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_keeps_raw_url_with_result() {
        let mut flow = SubmissionFlow::new();
        flow.begin("example.com".to_string());
        flow.resolve("http://short.ly/abc123".to_string());
        assert_eq!(
            flow.phase(),
            &Phase::Resolved {
                raw_url: "example.com".to_string(),
                short_url: "http://short.ly/abc123".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_ignored_when_nothing_pending() {
        let mut flow = SubmissionFlow::new();
        flow.resolve("http://short.ly/stale".to_string());
        assert_eq!(flow.phase(), &Phase::Idle);
    }

    #[test]
    fn test_acknowledge_yields_entry_exactly_once() {
        let mut flow = SubmissionFlow::new();
        flow.begin("example.com".to_string());
        flow.resolve("http://short.ly/abc123".to_string());

        let entry = flow.acknowledge().unwrap();
        assert_eq!(entry.short_url, "http://short.ly/abc123");
        assert_eq!(entry.raw_url, "example.com");
        assert_eq!(flow.phase(), &Phase::Idle);

        // a second close has nothing left to append
        assert!(flow.acknowledge().is_none());
    }

    #[test]
    fn test_failure_appends_no_history_and_allows_resubmit() {
        let mut flow = SubmissionFlow::new();
        flow.begin("example.com".to_string());
        flow.fail();
        assert_eq!(
            flow.phase(),
            &Phase::Failed {
                raw_url: "example.com".to_string()
            }
        );
        assert!(flow.acknowledge().is_none());

        // the failed cycle does not wedge the form
        assert!(flow.begin("example.com".to_string()));
    }

    #[test]
    fn test_history_preserves_order_and_duplicates() {
        let mut history = History::new();
        assert!(history.is_empty());

        let first = HistoryEntry {
            short_url: "http://short.ly/aaa".to_string(),
            raw_url: "one.com".to_string(),
        };
        let second = HistoryEntry {
            short_url: "http://short.ly/bbb".to_string(),
            raw_url: "two.com".to_string(),
        };
        history.push(first.clone());
        history.push(second.clone());
        history.push(first.clone());

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), &[first.clone(), second, first]);
    }

    #[test]
    fn test_full_cycle_end_to_end() {
        // input "example.com", base "http://short.ly/", suffix "abc123"
        let mut flow = SubmissionFlow::new();
        let mut history = History::new();

        assert!(flow.begin("example.com".to_string()));
        let resp: SubmitResponse = serde_json::from_str(r#"{"linky_url": "abc123"}"#).unwrap();
        flow.resolve(short_url("http://short.ly/", &resp.linky_url));

        if let Some(entry) = flow.acknowledge() {
            history.push(entry);
        }

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].short_url, "http://short.ly/abc123");
        assert_eq!(history.entries()[0].raw_url, "example.com");
        assert_eq!(flow.phase(), &Phase::Idle);
    }
}
