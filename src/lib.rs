//! Client-side behavior for the marketing site, compiled to WASM.
//!
//! The crate renders nothing itself: every page's markup comes from static
//! HTML, and this module attaches the interactive layer on top of it once the
//! DOM is ready. Each controller owns a disjoint set of elements and skips
//! itself when its elements are missing, so the same bundle runs on every
//! page.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod interactions;
pub mod lazy_load;
pub mod menu;
pub mod notify;
pub mod privacy;
pub mod scroll_effects;
pub mod smooth_scroll;
pub mod timing;
pub mod validate;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; ignore the error if a host page loaded us twice
    let _ = console_log::init_with_level(Level::Info);

    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(boot) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        boot();
    }
    Ok(())
}

/// Runs every controller exactly once per page load. Init failures are logged
/// and skipped; a broken enhancement must never take the page down.
pub fn boot() {
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    info!("Starting site enhancements");

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            warn!("boot aborted: {e}");
            return;
        }
    };

    if let Err(e) = menu::init(&document) {
        warn!("menu init failed: {e}");
    }
    if let Err(e) = scroll_effects::init(&document) {
        warn!("scroll effects init failed: {e}");
    }
    if let Err(e) = smooth_scroll::init(&document) {
        warn!("smooth scroll init failed: {e}");
    }
    if let Err(e) = interactions::init(&document) {
        warn!("micro-interactions init failed: {e}");
    }
    if let Err(e) = lazy_load::init(&document) {
        warn!("lazy load init failed: {e}");
    }
    if let Err(e) = privacy::init(&document) {
        warn!("privacy guard init failed: {e}");
    }
    if let Err(e) = form::init(&document) {
        warn!("form validation init failed: {e}");
    }

    mark_current_nav_link(&document);
}

/// Highlights the navbar link matching the current pathname, treating `/` and
/// `/index.html` as the same page.
fn mark_current_nav_link(document: &Document) {
    let Ok(window) = dom::window() else { return };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    for link in dom::query_all(document, ".navbar-nav .nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_current_path(&href, &path) {
            let _ = link.class_list().add_1("active");
            let _ = link.set_attribute("aria-current", "page");
        }
    }
}

pub(crate) fn is_current_path(href: &str, path: &str) -> bool {
    href == path
        || (path == "/" && href == "/index.html")
        || (path == "/index.html" && href == "/")
}
