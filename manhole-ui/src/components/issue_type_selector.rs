//! Dropdown selector for the issue category.

use crate::state::AppState;
use dioxus::prelude::*;
use manhole_core::IssueCategory;

#[component]
pub fn IssueTypeSelector() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;
    let current = form.read().issue_category();

    let on_change = move |evt: Event<FormData>| {
        form.write().select_issue_label(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "issue-type-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Issue type: "
            }
            select {
                id: "issue-type-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: current.is_none(),
                    "Select issue type"
                }
                for category in IssueCategory::ALL {
                    option {
                        value: category.label(),
                        selected: current == Some(category),
                        "{category}"
                    }
                }
            }
        }
    }
}
