//! Manhole defect report form
//!
//! One page, one draft:
//! 1. On mount: `AppState` provides an empty `ReportForm` dated today.
//! 2. Each section mutates the form through its signal. Location and photo
//!    preview run as spawned tasks and write back when their callback fires.
//! 3. On submit: the form validates in fixed order, logs the report through
//!    `LogSink` and resets, or shows the first missing field.

use dioxus::prelude::*;
use manhole_core::LogSink;
use manhole_ui::components::{
    AddressInput, ErrorDisplay, FormHeader, IssueTypeSelector, LocationPanel, PhotoPicker,
    ReportDatePicker, SubmitBar, SubmittedNotice,
};
use manhole_ui::platform;
use manhole_ui::state::{AppState, PHOTO_INPUT_ID};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("[Manhole] report form starting");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("manhole-report-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut form = state.form;
    let mut last_report = state.last_report;

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        last_report.set(None);
        let outcome = form.write().submit(LogSink);
        if let Ok(report) = outcome {
            last_report.set(Some(report.summary()));
            platform::clear_file_input(PHOTO_INPUT_ID);
        }
    };

    rsx! {
        div {
            style: "max-width: 560px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FormHeader {
                title: "Report a Manhole Issue".to_string(),
                instructions: "Add a photo, your location, the issue type and a nearby address.".to_string(),
            }
            SubmittedNotice {}
            ErrorDisplay {}
            form {
                onsubmit: on_submit,
                PhotoPicker {}
                LocationPanel {}
                IssueTypeSelector {}
                AddressInput {}
                ReportDatePicker {}
                SubmitBar {}
            }
        }
    }
}
