//! Browser adapters for the capabilities `manhole-core` abstracts.
//!
//! Geolocation goes through `navigator.geolocation.getCurrentPosition`, wrapped
//! in a `js_sys::Promise` so it can be awaited from a Dioxus task. File previews
//! read the blob's array buffer and base64-encode it into a data URI.

use anyhow::{anyhow, bail, Context};
use js_sys::{Function, Promise, Reflect, Uint8Array};
use manhole_core::browser::Browser;
use manhole_core::location::{PositionFailure, PositionOptions, Positioning};
use manhole_core::photo::{self, PhotoFile, PreviewError, PreviewReader};
use manhole_core::Fix;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Geolocation, GeolocationPosition, GeolocationPositionError, HtmlInputElement};

/// A file chosen through the photo input.
#[derive(Debug, Clone, PartialEq)]
pub struct WebPhoto(File);

impl WebPhoto {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn file(&self) -> &File {
        &self.0
    }
}

impl PhotoFile for WebPhoto {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// `navigator.geolocation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPositioning;

impl Positioning for BrowserPositioning {
    fn is_supported(&self) -> bool {
        geolocation().is_ok()
    }

    async fn current_position(&self, options: PositionOptions) -> Result<Fix, PositionFailure> {
        let geolocation = geolocation().map_err(|e| PositionFailure::Other(e.to_string()))?;
        let promise = request_position(&geolocation, &web_options(options));

        match JsFuture::from(promise).await {
            Ok(value) => {
                let position: GeolocationPosition = value
                    .dyn_into()
                    .map_err(|_| PositionFailure::Other("callback did not receive a position".to_string()))?;
                let coords = position.coords();
                Ok(Fix {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                    accuracy: Some(coords.accuracy()),
                })
            }
            Err(value) => Err(match value.dyn_into::<GeolocationPositionError>() {
                Ok(err) => PositionFailure::from_code(err.code(), err.message()),
                Err(other) => PositionFailure::Other(js_error(other).to_string()),
            }),
        }
    }
}

/// Reads a [`WebPhoto`] into a data URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobPreviewReader;

impl PreviewReader<WebPhoto> for BlobPreviewReader {
    async fn read_data_uri(&self, file: &WebPhoto) -> Result<String, PreviewError> {
        match read_bytes(file.file()).await {
            Ok(bytes) => Ok(photo::data_uri(&file.media_type(), &bytes)),
            Err(e) => Err(PreviewError {
                name: file.name(),
                reason: e.to_string(),
            }),
        }
    }
}

/// The first file selected in the `<input type="file">` with `input_id`.
pub fn selected_photo(input_id: &str) -> anyhow::Result<Option<WebPhoto>> {
    let input = file_input(input_id)?;
    Ok(input.files().and_then(|files| files.get(0)).map(WebPhoto::new))
}

/// Clear the selection so picking the same file again fires `change`.
pub fn clear_file_input(input_id: &str) {
    match file_input(input_id) {
        Ok(input) => input.set_value(""),
        Err(e) => log::warn!("[Manhole] platform: could not clear file input: {e}"),
    }
}

/// Browser family from `navigator.userAgent`.
pub fn detect_browser() -> Browser {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .map(|ua| Browser::detect(&ua))
        .unwrap_or(Browser::Other)
}

fn geolocation() -> anyhow::Result<Geolocation> {
    let window = web_sys::window().context("no window")?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        bail!("navigator.geolocation is not available");
    }
    navigator.geolocation().map_err(js_error)
}

fn web_options(options: PositionOptions) -> web_sys::PositionOptions {
    let web = web_sys::PositionOptions::new();
    web.set_enable_high_accuracy(options.enable_high_accuracy);
    web.set_timeout(options.timeout_ms);
    web.set_maximum_age(options.maximum_age_ms);
    web
}

/// Resolves with a `GeolocationPosition`, rejects with a `GeolocationPositionError`.
fn request_position(geolocation: &Geolocation, options: &web_sys::PositionOptions) -> Promise {
    Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_on_error = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |err: JsValue| {
            let _ = reject_on_error.call1(&JsValue::NULL, &err);
        });
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    })
}

async fn read_bytes(file: &File) -> anyhow::Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

fn file_input(input_id: &str) -> anyhow::Result<HtmlInputElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no document")?;
    document
        .get_element_by_id(input_id)
        .with_context(|| format!("no element with id {input_id}"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| anyhow!("element {input_id} is not an input"))
}

fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{value:?}"),
    }
}
