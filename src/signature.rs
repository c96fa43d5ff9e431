//! Signature Upload Codec
//!
//! Converts a picked image file into a base64 data URL for the in-form
//! preview. The prefix is stripped later, when the payload is built.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};

/// Read a file as a base64 data URL, delivering the result to `on_loaded`.
pub fn read_as_data_url(file: File, on_loaded: impl Fn(String) + 'static) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_handle = reader.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Ok(result) = reader_handle.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    // One closure per read; the reader owns nothing after firing.
    onload.forget();

    if reader.read_as_data_url(&file).is_err() {
        web_sys::console::error_1(&"failed to start signature file read".into());
    }
}
