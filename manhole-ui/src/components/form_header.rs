//! Form header with title and a short instruction line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FormHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub instructions: String,
}

#[component]
pub fn FormHeader(props: FormHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.instructions.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.instructions}"
                }
            }
        }
    }
}
