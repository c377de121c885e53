// SPDX-License-Identifier: MIT

#![warn(missing_docs)]
#![crate_name = "js_hooks"]

//! # Js Hooks
//!
//! [`js_hooks`][`crate`] is a collection of utilities for a WASM application in a JavaScript
//! environment: document/canvas lookup, console logging, and the error sink the demos report
//! through.

use js_sys::Reflect;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

/// Element id of the region that [`report_error`] appends to.
pub const ERROR_BOX_ID: &str = "error-box";

/// Gets the window.
pub fn window() -> Window {
    web_sys::window().expect("no window")
}

/// Gets the document.
pub fn document() -> Document {
    window().document().expect("no document")
}

/// Looks up a canvas element by its id. Returns [`None`] if the element is absent or isn't a
/// canvas.
pub fn canvas(id: &str) -> Option<HtmlCanvasElement> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Extracts an error message from a JavaScript error.
pub fn error_message(error: &JsValue) -> Option<String> {
    Reflect::get(error, &JsValue::from_str("message"))
        .as_ref()
        .ok()
        .and_then(JsValue::as_string)
}

/// Reports an error message to the user: appends it as a paragraph to the `#error-box` element
/// and writes it to the console. Never fails; if the error box is missing the message still
/// reaches the console.
pub fn report_error(message: &str) {
    error(message);

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let (Some(error_box), Ok(paragraph)) = (
        document.get_element_by_id(ERROR_BOX_ID),
        document.create_element("p"),
    ) {
        paragraph.set_text_content(Some(message));
        // Ignore failure to append, the console already has the message.
        let _ = error_box.append_child(&paragraph);
    }
}

/// Log an error to JavaScript's console. Use this instead of [`eprintln!`].
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::error_args(&format_args!($($t)*))
    };
}

/// Log to JavaScript's console. Use this instead of [`println!`].
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log_args(&format_args!($($t)*))
    };
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[doc(hidden)]
pub fn error_args(args: &fmt::Arguments) {
    error(&args.to_string())
}

#[doc(hidden)]
pub fn log_args(args: &fmt::Arguments) {
    log(&args.to_string())
}
