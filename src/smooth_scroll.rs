//! Animated scrolling for in-page anchor links.
//!
//! A single delegated click handler on the document resolves the nearest
//! anchor ancestor, so links added after boot still work.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::error::Result;
use crate::{config, dom};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"], a[href^=\"/#\"]";

pub fn init(document: &Document) -> Result<()> {
    let doc = document.clone();
    dom::listen(document, "click", move |event: MouseEvent| {
        let Some(link) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(target_id) = anchor_target(&href) else {
            return;
        };
        let Some(target) = doc.get_element_by_id(&target_id) else {
            return;
        };

        event.prevent_default();
        let offset = doc
            .query_selector("header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(config::HEADER_OFFSET_FALLBACK);

        if let Ok(window) = dom::window() {
            let top = target.get_bounding_client_rect().top()
                + window.page_y_offset().unwrap_or(0.0)
                - offset;
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    })
}

/// Extracts the target element id from an anchor href. Bare `#` and the `#!`
/// placeholder are not scroll targets.
pub(crate) fn anchor_target(href: &str) -> Option<String> {
    if href == "#" || href == "#!" {
        return None;
    }
    let rest = href.strip_prefix('/').unwrap_or(href);
    let id = rest.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::anchor_target;

    #[test]
    fn strips_hash_and_leading_slash() {
        assert_eq!(anchor_target("#kontakt").as_deref(), Some("kontakt"));
        assert_eq!(anchor_target("/#kontakt").as_deref(), Some("kontakt"));
    }

    #[test]
    fn placeholder_and_empty_anchors_are_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#!"), None);
        assert_eq!(anchor_target("/#"), None);
    }

    #[test]
    fn non_anchor_hrefs_yield_nothing() {
        assert_eq!(anchor_target("/kontakt.html"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }
}
