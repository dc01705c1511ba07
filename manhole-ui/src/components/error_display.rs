//! Shows the form's current error, if any.

use crate::state::AppState;
use dioxus::prelude::*;
use manhole_core::FormError;

fn heading(error: &FormError) -> &'static str {
    match error {
        FormError::Location(_) => "Location problem: ",
        FormError::Photo(_) => "Photo problem: ",
        FormError::Submission(_) => "Missing information: ",
    }
}

/// Renders nothing while the form has no error.
#[component]
pub fn ErrorDisplay() -> Element {
    let state = use_context::<AppState>();
    let banner = state
        .form
        .read()
        .error()
        .map(|error| (heading(error), error.to_string()));

    rsx! {
        if let Some((title, message)) = banner {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "{title}" }
                "{message}"
            }
        }
    }
}
