//! Date of the report, defaulting to today.

use crate::state::AppState;
use dioxus::prelude::*;
use manhole_core::dates;

#[component]
pub fn ReportDatePicker() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;
    let date = dates::format_date(&form.read().report_date());

    let on_change = move |evt: Event<FormData>| match dates::parse_date(&evt.value()) {
        Ok(date) => form.write().set_report_date(date),
        Err(e) => log::warn!("[Manhole] form: ignoring date input {:?}: {e}", evt.value()),
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                style: "font-weight: bold;",
                "Date: "
                input {
                    r#type: "date",
                    value: "{date}",
                    onchange: on_change,
                }
            }
        }
    }
}
