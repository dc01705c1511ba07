//! Confirmation of the last successful submission.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SubmittedNotice() -> Element {
    let state = use_context::<AppState>();
    let last = state.last_report.read().clone();

    rsx! {
        if let Some(report) = last {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;",
                strong { "Report submitted: " }
                "{report.issue_category} near {report.reference_address} on {report.report_date}"
            }
        }
    }
}
