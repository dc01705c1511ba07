//! Button that acquires the device location, plus the acquired coordinate.

use crate::components::BusyIndicator;
use crate::platform::BrowserPositioning;
use crate::state::AppState;
use dioxus::prelude::*;
use manhole_core::location::LocationAcquirer;

#[component]
pub fn LocationPanel() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;
    let loading = form.read().is_loading();
    let coordinate = form.read().coordinate();

    let on_locate = move |_: Event<MouseData>| {
        // The button is disabled while loading; this covers a double click
        // that lands before the re-render.
        if form.read().is_loading() {
            return;
        }
        let acquirer = LocationAcquirer::from_config(BrowserPositioning, form.read().config())
            .with_browser((state.browser)());
        form.write().begin_location_request();
        spawn(async move {
            let result = acquirer.acquire().await;
            form.write().finish_location_request(result);
        });
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Location"
            }
            button {
                r#type: "button",
                disabled: loading,
                onclick: on_locate,
                "Get Current Location"
            }
            if loading {
                BusyIndicator { label: "Locating...".to_string() }
            }
            if let Some(coordinate) = coordinate {
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #2E7D32;",
                    "Coordinates: {coordinate}"
                }
            }
        }
    }
}
