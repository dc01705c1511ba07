//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider`; components retrieve
//! it with `use_context::<AppState>()` and mutate the form through its signal.

use dioxus::prelude::*;
use manhole_core::browser::Browser;
use manhole_core::report::ReportSummary;
use manhole_core::ReportForm;

use crate::platform::{self, WebPhoto};

/// DOM id of the photo `<input type="file">`.
pub const PHOTO_INPUT_ID: &str = "manhole-photo-input";

#[derive(Clone, Copy)]
pub struct AppState {
    /// The draft plus its error and loading flags
    pub form: Signal<ReportForm<WebPhoto>>,
    /// Summary of the most recent successful submission
    pub last_report: Signal<Option<ReportSummary>>,
    /// Browser family used to pick permission help text
    pub browser: Signal<Browser>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: Signal::new(ReportForm::new()),
            last_report: Signal::new(None),
            browser: Signal::new(platform::detect_browser()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
