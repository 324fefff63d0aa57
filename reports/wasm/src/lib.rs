//! WASM controller for the af2 report page.
//!
//! Binds the page's elements once, then wires the search form, company
//! quick-links, trusted list, auto-refresh countdown, panel toggle and the
//! verification widget callback. All markup comes from `af2-report`, so
//! what the browser shows is byte-for-byte what `af2_render` writes.
//!
//! Page-level configuration may be supplied as JSON in
//! `<script type="application/json" id="viewer-config">`.

pub mod bindings;
pub mod console;
pub mod error;
pub mod fetch;
pub mod viewer;

use std::cell::RefCell;
use std::rc::Rc;

use af2_report::ViewerConfig;
use af2_report::dom::ElementId;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use bindings::ViewBindings;
pub use error::ViewerError;
pub use viewer::ReportViewer;

/// Id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

thread_local! {
    static VIEWER: RefCell<Option<Rc<ReportViewer>>> = const { RefCell::new(None) };
}

/// Initialize panic hook and start the viewer on page load.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    start().map_err(JsValue::from)
}

fn start() -> Result<(), ViewerError> {
    let window = web_sys::window().ok_or_else(|| ViewerError::Js("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ViewerError::Js("no document".into()))?;

    let config = load_config(&document);
    let bindings = ViewBindings::bind(&document);
    let viewer = ReportViewer::new(window, document, config, bindings);

    viewer.attach()?;
    viewer.load_recent();
    viewer.start_refresh()?;

    VIEWER.with(|slot| *slot.borrow_mut() = Some(viewer));
    Ok(())
}

/// Read the inline config block, falling back to defaults.
pub fn load_config(document: &Document) -> ViewerConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ViewerConfig::default();
    };

    match ViewerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            console::warn(&format!("#{}: {}, using defaults", CONFIG_ELEMENT_ID, e));
            ViewerConfig::default()
        }
    }
}

/// Verification widget success callback: enables the submit button.
#[wasm_bindgen(js_name = onCaptchaSuccess)]
pub fn on_captcha_success(_token: JsValue) {
    let handled = VIEWER.with(|slot| match slot.borrow().as_ref() {
        Some(viewer) => {
            viewer.unlock_submit();
            true
        }
        None => false,
    });
    if handled {
        return;
    }

    // Widget finished before the viewer started.
    if let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ElementId::SubmitButton.as_str()))
    {
        viewer::enable(&button);
    }
}

/// Stop the auto-refresh countdown, if one is running.
#[wasm_bindgen(js_name = stopAutoRefresh)]
pub fn stop_auto_refresh() {
    VIEWER.with(|slot| {
        if let Some(viewer) = slot.borrow().as_ref() {
            viewer.stop_refresh();
        }
    });
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("af2-viewer v{} ready", env!("CARGO_PKG_VERSION"))
}
