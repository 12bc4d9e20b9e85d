//! Scroll-triggered effects: reveal animations, scroll-spy, count-up counters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::Result;
use crate::{config, dom};

const REVEAL_SELECTOR: &str = ".card, .btn, h1, h2, h3, p, img";

pub fn init(document: &Document) -> Result<()> {
    init_reveal(document)?;
    init_scroll_spy(document)?;
    init_count_up(document)
}

fn observe_with(
    callback: impl FnMut(Array, IntersectionObserver) + 'static,
    options: &IntersectionObserverInit,
) -> Result<IntersectionObserver> {
    let closure =
        Closure::wrap(Box::new(callback) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), options)?;
    closure.forget();
    Ok(observer)
}

fn entries_of(list: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    list.iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
}

/// Primes the reveal targets to be invisible and fades them in once 10%
/// visible. The observer intentionally stays attached for the page lifetime,
/// as the shipped site never disconnected it either.
fn init_reveal(document: &Document) -> Result<()> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.1));

    let observer = observe_with(
        |entries: Array, _| {
            for entry in entries_of(&entries) {
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                }
            }
        },
        &options,
    )?;

    for element in dom::query_all(document, REVEAL_SELECTOR) {
        dom::set_style(&element, "opacity", "0");
        dom::set_style(&element, "transform", "translateY(30px)");
        dom::set_style(
            &element,
            "transition",
            "opacity 0.8s ease-out, transform 0.8s ease-out",
        );
        observer.observe(&element);
    }
    Ok(())
}

/// Marks the nav link of the section currently in view. The root margin pins
/// "in view" to a band below the fixed header and above the lower third.
fn init_scroll_spy(document: &Document) -> Result<()> {
    let sections = dom::query_all(document, "section[id]");
    if sections.is_empty() {
        return Ok(());
    }
    let nav_links = dom::query_all(document, ".nav-link");

    let options = IntersectionObserverInit::new();
    options.set_root_margin("-100px 0px -66%");

    let observer = observe_with(
        move |entries: Array, _| {
            for entry in entries_of(&entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                for link in &nav_links {
                    let _ = link.class_list().remove_1("active");
                    let _ = link.remove_attribute("aria-current");
                    let href = link.get_attribute("href").unwrap_or_default();
                    if nav_link_matches(&href, &id) {
                        let _ = link.class_list().add_1("active");
                        let _ = link.set_attribute("aria-current", "page");
                    }
                }
            }
        },
        &options,
    )?;

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}

pub(crate) fn nav_link_matches(href: &str, id: &str) -> bool {
    let anchor = format!("#{id}");
    href == anchor || href == format!("/{anchor}")
}

/// One observer per counter so each can unobserve itself after firing. The
/// `data-counted` marker guards against a second trigger before unobserve
/// lands.
fn init_count_up(document: &Document) -> Result<()> {
    for counter in dom::query_all(document, "[data-count]") {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(0.1));

        let target = counter.clone();
        let observer = observe_with(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries_of(&entries) {
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Some(element) = target.dyn_ref::<HtmlElement>() else {
                        continue;
                    };
                    if element.dataset().get("counted").is_some() {
                        continue;
                    }
                    let _ = element.dataset().set("counted", "true");
                    animate_count(element);
                    observer.unobserve(&target);
                }
            },
            &options,
        )?;
        observer.observe(&counter);
    }
    Ok(())
}

/// Counts from 0 to `data-count` in fixed ticks, writing `floor(current)`
/// until the running value reaches the target, then the exact target. The
/// `Interval` handle is taken out of its slot (and thereby cancelled) from
/// within its own callback on completion.
fn animate_count(element: &HtmlElement) {
    let Some(target) = element
        .dataset()
        .get("count")
        .and_then(|raw| parse_count(&raw))
    else {
        return;
    };

    let step = count_step(target, config::COUNT_UP_DURATION_MS, config::COUNT_UP_TICK_MS);
    let element = element.clone();
    let current = Cell::new(0.0_f64);
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let tick_handle = Rc::clone(&handle);
    let interval = Interval::new(config::COUNT_UP_TICK_MS, move || {
        let next = current.get() + step;
        current.set(next);
        if next >= target {
            element.set_text_content(Some(&format_count(target)));
            tick_handle.borrow_mut().take();
        } else {
            element.set_text_content(Some(&format_count(next.floor())));
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Reads the leading integer of a `data-count` value, so annotations like
/// `"250+"` animate to 250 just as they did under `parseInt`.
pub(crate) fn parse_count(raw: &str) -> Option<f64> {
    let rest = raw.trim_start();
    let (sign, rest) = match rest.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|value| sign * value)
}

pub(crate) fn count_step(target: f64, duration_ms: u32, tick_ms: u32) -> f64 {
    target / f64::from(duration_ms / tick_ms)
}

fn format_count(value: f64) -> String {
    format!("{}", value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_matching_accepts_both_href_shapes() {
        assert!(nav_link_matches("#services", "services"));
        assert!(nav_link_matches("/#services", "services"));
        assert!(!nav_link_matches("#service", "services"));
        assert!(!nav_link_matches("/kontakt.html", "services"));
    }

    #[test]
    fn count_reaches_target_within_duration() {
        let target = 250.0;
        let step = count_step(target, 2000, 16);
        let mut current = 0.0;
        let mut ticks = 0;
        while current < target {
            current += step;
            ticks += 1;
            assert!(ticks <= 2000 / 16, "animation overran its duration");
        }
        // last write is the exact target, not the overshot running value
        assert!(current >= target);
    }

    #[test]
    fn count_step_scales_with_target() {
        assert_eq!(count_step(125.0, 2000, 16), 1.0);
        assert_eq!(count_step(0.0, 2000, 16), 0.0);
    }

    #[test]
    fn count_target_takes_the_leading_integer() {
        assert_eq!(parse_count("250"), Some(250.0));
        assert_eq!(parse_count("250+"), Some(250.0));
        assert_eq!(parse_count(" 42 "), Some(42.0));
        assert_eq!(parse_count("3.7"), Some(3.0));
        assert_eq!(parse_count("-12"), Some(-12.0));
        assert_eq!(parse_count("viele"), None);
        assert_eq!(parse_count(""), None);
    }
}
