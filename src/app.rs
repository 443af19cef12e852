//! Application session state: the committed topic, the fetch lifecycle,
//! and the print latch.
//!
//! All transitions are synchronous methods on [`AppState`] so the whole
//! lifecycle is testable without a browser. The async part (actually
//! calling the generation client) lives in `main.rs`, which feeds results
//! back through [`AppState::apply_success`] / [`AppState::apply_error`]
//! with the request token it was handed at [`AppState::begin_fetch`] time.

use crate::gemini::GenerateError;
use crate::model::InfographicData;
use crate::time::PulseClock;

/// Topic fetched automatically on first load.
pub const DEFAULT_TOPIC: &str = "Electromagnetism";

/// The fixed suggestion chips under the search box.
pub const SUGGESTED_TOPICS: [&str; 6] = [
    "Electromagnetism",
    "Thermodynamics",
    "Quantum Mechanics",
    "Fluid Dynamics",
    "Optics & Light",
    "Nuclear Physics",
];

// ── Action IDs (registered as click targets during rendering) ──────────

pub const SUBMIT_SEARCH: u16 = 1;
pub const RETRY_FETCH: u16 = 2;
pub const PRINT_INFOGRAPHIC: u16 = 3;
/// Suggestion chip `i` is `SUGGESTION_BASE + i`.
pub const SUGGESTION_BASE: u16 = 10;

/// Which render branch is active. Exactly one value at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the error panel shows. `kind` is the stable log label.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub kind: &'static str,
    pub message: String,
}

/// Two-frame print latch. `window.print()` must fire only after a frame
/// has been rendered with the print palette, so the request passes
/// through `Requested` (render print palette) and `Armed` (render again,
/// then fire) before resetting.
#[derive(Clone, Copy, Debug, PartialEq)]
enum PrintLatch {
    Idle,
    Requested,
    Armed,
}

pub struct AppState {
    /// The committed topic — what retry re-fetches. Independent of `input`.
    pub topic: String,
    /// The search-box text as typed.
    pub input: String,
    pub status: LoadingState,
    /// Present only when `status == Success`.
    pub data: Option<InfographicData>,
    /// Meaningful only when `status == Error`.
    pub error: Option<ErrorNotice>,
    pub pulse: PulseClock,
    latest_token: u64,
    print: PrintLatch,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            input: String::new(),
            status: LoadingState::Idle,
            data: None,
            error: None,
            pulse: PulseClock::new(),
            latest_token: 0,
            print: PrintLatch::Idle,
        }
    }

    /// Start a fetch: commit the topic, clear the error, move to Loading,
    /// and hand out the token the completion must present.
    pub fn begin_fetch(&mut self, topic: &str) -> u64 {
        self.topic = topic.to_string();
        self.status = LoadingState::Loading;
        self.error = None;
        self.latest_token += 1;
        self.latest_token
    }

    /// Apply a successful completion. Stale tokens mutate nothing: only
    /// the most recently initiated request may win.
    pub fn apply_success(&mut self, token: u64, data: InfographicData) {
        if token != self.latest_token {
            log::debug!(
                "dropping stale success (token {} < {})",
                token,
                self.latest_token
            );
            return;
        }
        self.data = Some(data);
        self.status = LoadingState::Success;
    }

    /// Apply a failed completion. Stale tokens mutate nothing.
    pub fn apply_error(&mut self, token: u64, error: &GenerateError) {
        if token != self.latest_token {
            log::debug!(
                "dropping stale error (token {} < {}): {}",
                token,
                self.latest_token,
                error.kind()
            );
            return;
        }
        log::error!("generation failed [{}]: {}", error.kind(), error);
        self.error = Some(ErrorNotice {
            kind: error.kind(),
            message: error.user_message(),
        });
        self.status = LoadingState::Error;
    }

    /// Submit the search box. Returns the topic to fetch, or `None` when
    /// the trimmed input is empty (in which case nothing changed).
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }

    /// A suggestion chip overwrites the visible search-box text and yields
    /// the topic to fetch (which `begin_fetch` then commits).
    pub fn choose_suggestion(&mut self, index: usize) -> Option<String> {
        let topic = SUGGESTED_TOPICS.get(index)?;
        self.input = topic.to_string();
        Some(topic.to_string())
    }

    /// Retry re-fetches the last committed topic, not the box text.
    pub fn retry_topic(&self) -> String {
        self.topic.clone()
    }

    // ── print latch ────────────────────────────────────────────────

    pub fn request_print(&mut self) {
        self.print = PrintLatch::Requested;
    }

    /// True while frames should use the print palette.
    pub fn print_palette_active(&self) -> bool {
        self.print != PrintLatch::Idle
    }

    /// Advance the latch one frame. Returns true on the frame the print
    /// dialog should actually be opened; the latch then resets.
    pub fn advance_print(&mut self) -> bool {
        match self.print {
            PrintLatch::Idle => false,
            PrintLatch::Requested => {
                self.print = PrintLatch::Armed;
                false
            }
            PrintLatch::Armed => {
                self.print = PrintLatch::Idle;
                true
            }
        }
    }
}
