//! Free-text reference address.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn AddressInput() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;
    let address = form.read().reference_address().to_string();

    let on_input = move |evt: Event<FormData>| {
        form.write().set_reference_address(evt.value());
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: "reference-address",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Reference address"
            }
            input {
                id: "reference-address",
                r#type: "text",
                placeholder: "Nearest landmark or street address",
                value: "{address}",
                style: "width: 100%; box-sizing: border-box;",
                oninput: on_input,
            }
        }
    }
}
