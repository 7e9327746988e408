//! Rich-Text Editor Binding
//!
//! TinyMCE is loaded by the page as a global script. When it is missing
//! the task form falls back to the plain textarea value.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tinymce, js_name = init, catch)]
    fn tinymce_init(options: &JsValue) -> Result<JsValue, JsValue>;

    type Editor;

    #[wasm_bindgen(js_namespace = tinymce, js_name = get, catch)]
    fn tinymce_get(id: &str) -> Result<Option<Editor>, JsValue>;

    #[wasm_bindgen(method, js_name = getContent)]
    fn get_content(this: &Editor) -> String;
}

#[derive(Serialize)]
struct EditorOptions<'a> {
    selector: &'a str,
    plugins: &'a str,
    toolbar: &'a str,
    height: u32,
}

const PLUGINS: &str = "lists link image table code";
const TOOLBAR: &str = "undo redo | formatselect | bold italic | alignleft aligncenter alignright | bullist numlist outdent indent | link image | table | code";

/// Turn the textarea with this id into a rich-text editor
pub fn attach(textarea_id: &str) {
    let selector = format!("#{}", textarea_id);
    let options = EditorOptions { selector: &selector, plugins: PLUGINS, toolbar: TOOLBAR, height: 300 };
    let js_options = match serde_wasm_bindgen::to_value(&options) {
        Ok(value) => value,
        Err(e) => {
            log::error!("[EDITOR] options: {}", e);
            return;
        }
    };
    match tinymce_init(&js_options) {
        Ok(_) => log::debug!("[EDITOR] attached to {}", selector),
        Err(e) => log::warn!("[EDITOR] tinymce unavailable, using plain textarea: {:?}", e),
    }
}

/// Current editor HTML, or None when no editor is attached
pub fn content(textarea_id: &str) -> Option<String> {
    tinymce_get(textarea_id).ok().flatten().map(|editor| editor.get_content())
}
