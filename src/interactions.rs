//! Decorative micro-interactions: click ripples and hover lift.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, MouseEvent};

use crate::error::Result;
use crate::{config, dom};

const RIPPLE_SELECTOR: &str = ".btn, .c-button, .card";
const HOVER_SELECTOR: &str = ".btn, .c-button, .nav-link, .card";

pub fn init(document: &Document) -> Result<()> {
    init_ripple(document)?;
    init_hover(document)
}

fn init_ripple(document: &Document) -> Result<()> {
    for element in dom::query_all(document, RIPPLE_SELECTOR) {
        let host = element.clone();
        let doc = document.clone();
        dom::listen(&element, "click", move |event: MouseEvent| {
            spawn_ripple(&doc, &host, &event);
        })?;
    }
    inject_ripple_keyframes(document)
}

/// A one-shot span sized to the host's larger dimension, centered on the
/// click point and removed once its animation has played out.
fn spawn_ripple(document: &Document, host: &Element, event: &MouseEvent) {
    let Ok(ripple) = document.create_element("span") else {
        return;
    };

    let rect = host.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    let _ = ripple.set_attribute(
        "style",
        &format!(
            "position: absolute; width: {size}px; height: {size}px; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.5); \
             left: {x}px; top: {y}px; transform: scale(0); \
             animation: ripple-animation 0.6s ease-out; pointer-events: none;"
        ),
    );

    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");

    if host.append_child(&ripple).is_ok() {
        Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    }
}

fn inject_ripple_keyframes(document: &Document) -> Result<()> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(
        "@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }",
    ));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

fn init_hover(document: &Document) -> Result<()> {
    for element in dom::query_all(document, HOVER_SELECTOR) {
        let target = element.clone();
        dom::listen(&element, "mouseenter", move |_: MouseEvent| {
            dom::set_style(&target, "transition", "all 0.3s ease-out");
            if target.class_list().contains("card") {
                dom::set_style(&target, "transform", "translateY(-8px) scale(1.02)");
                dom::set_style(&target, "box-shadow", "var(--shadow-xl)");
            } else {
                dom::set_style(&target, "transform", "translateY(-2px)");
            }
        })?;

        let target = element.clone();
        dom::listen(&element, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&target, "transform", "");
            if target.class_list().contains("card") {
                dom::set_style(&target, "box-shadow", "");
            }
        })?;
    }
    Ok(())
}
