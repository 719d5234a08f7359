//! File Reading
//!
//! Reads an `<input type="file">` selection into memory for the gallery.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

/// A file read fully into memory
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

fn file_input(ev: &Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// First file chosen in the input that fired `ev`, if any
pub fn first_selected_file(ev: &Event) -> Option<File> {
    file_input(ev)?.files()?.get(0)
}

/// Reset the input so picking the same file again fires `change`
pub fn clear_file_input(ev: &Event) {
    if let Some(input) = file_input(ev) {
        input.set_value("");
    }
}

/// Read the whole file
pub async fn read_file(file: File) -> Result<SelectedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("arrayBuffer failed: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile {
        name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}
