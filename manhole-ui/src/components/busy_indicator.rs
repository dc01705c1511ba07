use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BusyIndicatorProps {
    #[props(default = "Working...".to_string())]
    pub label: String,
}

/// Inline indicator shown while a request is in flight.
#[component]
pub fn BusyIndicator(props: BusyIndicatorProps) -> Element {
    rsx! {
        span {
            style: "margin-left: 8px; color: #666; font-size: 13px;",
            "{props.label}"
        }
    }
}
