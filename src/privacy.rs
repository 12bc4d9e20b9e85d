//! Click observer on privacy-policy links.
//!
//! Deliberately a pass-through: plain same-host clicks, modified clicks and
//! external links all navigate exactly as the browser would on its own. The
//! hook only exists so privacy navigation has a single place to intercept.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, MouseEvent};

use crate::error::Result;
use crate::dom;

pub fn init(document: &Document) -> Result<()> {
    let location = dom::window()?.location();
    let current_host = location.hostname().unwrap_or_default();
    let current_path = location.pathname().unwrap_or_default();

    for link in dom::query_all(document, "a[href*=\"privacy\"]") {
        let anchor = link.clone();
        let host = current_host.clone();
        let path = current_path.clone();
        dom::listen(&link, "click", move |event: MouseEvent| {
            if path != "/privacy.html" {
                let external = anchor
                    .dyn_ref::<HtmlAnchorElement>()
                    .map(|a| a.hostname() != host)
                    .unwrap_or(false);
                if !external && !event.ctrl_key() && !event.meta_key() {
                    // plain internal click, let the browser navigate
                    return;
                }
            }
        })?;
    }
    Ok(())
}
