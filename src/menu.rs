//! Collapsible navigation menu.
//!
//! Two states, open and closed, mirrored into the DOM: the `show` class and
//! `max-height` on the panel, `aria-expanded` on the toggler, and a scroll
//! lock class on `<body>`. Besides the toggler, the menu closes on nav-link
//! clicks, Escape, clicks outside the header, and a debounced resize past the
//! desktop breakpoint.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::error::Result;
use crate::{config, dom, timing};

struct MenuController {
    header: HtmlElement,
    toggler: Element,
    panel: HtmlElement,
    body: HtmlElement,
    is_open: Cell<bool>,
}

/// No-op on pages without a collapsible navbar.
pub fn init(document: &Document) -> Result<()> {
    let Some(toggler) = document.query_selector(".navbar-toggler")? else {
        return Ok(());
    };
    let Some(panel) = document
        .query_selector(".navbar-collapse")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let Some(header) = document
        .query_selector("header")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let menu = Rc::new(MenuController {
        header,
        toggler,
        panel,
        body: dom::body()?,
        is_open: Cell::new(false),
    });
    menu.wire(document)
}

impl MenuController {
    fn wire(self: &Rc<Self>, document: &Document) -> Result<()> {
        let menu = Rc::clone(self);
        dom::listen(&self.toggler, "click", move |event: MouseEvent| {
            event.prevent_default();
            menu.toggle();
        })?;

        for link in dom::query_all(document, ".nav-link") {
            let menu = Rc::clone(self);
            dom::listen(&link, "click", move |_: MouseEvent| {
                if menu.is_open.get() {
                    menu.close();
                }
            })?;
        }

        let menu = Rc::clone(self);
        dom::listen(document, "keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" && menu.is_open.get() {
                menu.close();
            }
        })?;

        let menu = Rc::clone(self);
        dom::listen(document, "click", move |event: MouseEvent| {
            if !menu.is_open.get() {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !menu.header.contains(target.as_ref()) {
                menu.close();
            }
        })?;

        let menu = Rc::clone(self);
        let on_resize = timing::debounce(config::RESIZE_DEBOUNCE_MS, move || {
            if should_close_on_resize(viewport_width(), menu.is_open.get()) {
                menu.close();
            }
        });
        let window = dom::window()?;
        dom::listen0(window.as_ref(), "resize", on_resize)?;

        Ok(())
    }

    fn toggle(&self) {
        if self.is_open.get() {
            self.close();
        } else {
            self.open();
        }
    }

    fn open(&self) {
        self.is_open.set(true);
        let _ = self.panel.class_list().add_1("show");
        let _ = self.toggler.set_attribute("aria-expanded", "true");
        let _ = self.body.class_list().add_1("u-no-scroll");

        let height = panel_max_height(
            self.panel.scroll_height(),
            viewport_height(),
            self.header.offset_height(),
        );
        let _ = self
            .panel
            .style()
            .set_property("max-height", &format!("{height}px"));
    }

    fn close(&self) {
        self.is_open.set(false);
        let _ = self.panel.class_list().remove_1("show");
        let _ = self.toggler.set_attribute("aria-expanded", "false");
        let _ = self.body.class_list().remove_1("u-no-scroll");
        let _ = self.panel.style().set_property("max-height", "0");
    }
}

/// Panel height is capped so the open menu never extends past the viewport.
fn panel_max_height(scroll_height: i32, viewport_height: i32, header_height: i32) -> i32 {
    scroll_height.min(viewport_height - header_height - config::MENU_BOTTOM_MARGIN)
}

/// An open menu force-closes once the viewport reaches the desktop layout.
fn should_close_on_resize(viewport_width: f64, is_open: bool) -> bool {
    is_open && viewport_width >= config::MOBILE_BREAKPOINT
}

fn viewport_width() -> f64 {
    dom::window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn viewport_height() -> i32 {
    dom::window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as i32
}
