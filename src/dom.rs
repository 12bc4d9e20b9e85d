//! Small helpers over `web-sys` shared by every controller.
//!
//! Listeners registered through [`listen`] live for the whole page: the
//! backing `Closure` is leaked with `.forget()`, which is what we want for
//! document-lifetime handlers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or(Error::NoBody)
}

/// All elements in the document matching `selector`. Selector syntax errors
/// come back as an empty list, matching the "silently skip" failure mode.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

/// All descendants of `root` matching `selector`.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Attaches a page-lifetime listener taking the event object.
pub fn listen<E>(target: &EventTarget, kind: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attaches a page-lifetime listener that ignores the event object.
pub fn listen0(target: &EventTarget, kind: &str, handler: impl FnMut() + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Best-effort inline style write; non-HTML elements are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
