//! Submit button; disabled while a request is in flight.

use crate::components::BusyIndicator;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SubmitBar() -> Element {
    let state = use_context::<AppState>();
    let loading = state.form.read().is_loading();

    rsx! {
        div {
            style: "margin: 16px 0;",
            button {
                r#type: "submit",
                disabled: loading,
                style: "padding: 8px 20px; font-weight: bold;",
                "Submit Report"
            }
            if loading {
                BusyIndicator { label: "Submitting...".to_string() }
            }
        }
    }
}
