//! Photo selection with preview and removal.

use crate::platform::{self, BlobPreviewReader};
use crate::state::{AppState, PHOTO_INPUT_ID};
use dioxus::prelude::*;
use manhole_core::photo::PreviewReader;

#[component]
pub fn PhotoPicker() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;
    let preview = form.read().photo_preview().map(str::to_string);
    let has_photo = form.read().photo().is_some();

    let on_select = move |_evt: Event<FormData>| {
        let photo = match platform::selected_photo(PHOTO_INPUT_ID) {
            Ok(Some(photo)) => photo,
            Ok(None) => return,
            Err(e) => {
                log::warn!("[Manhole] photo: could not read selection: {e}");
                return;
            }
        };

        let staged = form.write().stage_photo(photo.clone());
        let ticket = match staged {
            Ok(ticket) => ticket,
            Err(_) => {
                platform::clear_file_input(PHOTO_INPUT_ID);
                return;
            }
        };

        spawn(async move {
            let result = BlobPreviewReader.read_data_uri(&photo).await;
            form.write().finish_preview(ticket, result);
        });
    };

    let on_remove = move |_: Event<MouseData>| {
        form.write().remove_photo();
        platform::clear_file_input(PHOTO_INPUT_ID);
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            label {
                r#for: PHOTO_INPUT_ID,
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Photo of the manhole"
            }
            input {
                id: PHOTO_INPUT_ID,
                r#type: "file",
                accept: "image/*",
                "capture": "environment",
                onchange: on_select,
            }
            if let Some(src) = preview {
                div {
                    style: "margin-top: 8px;",
                    img {
                        src: "{src}",
                        alt: "Selected manhole photo",
                        style: "max-width: 100%; max-height: 240px; border-radius: 4px;",
                    }
                }
            }
            if has_photo {
                button {
                    r#type: "button",
                    style: "margin-top: 8px;",
                    onclick: on_remove,
                    "Remove Photo"
                }
            }
        }
    }
}
