//! DOM-level tests, run in a browser via `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn set_body(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

#[wasm_bindgen_test]
fn lazy_load_annotates_all_but_the_logo() {
    set_body(
        "<img id=\"photo\">\
         <img id=\"logo\" class=\"c-logo__img\">\
         <img id=\"eager\" loading=\"eager\">",
    );
    site_ui::lazy_load::init(&document()).unwrap();

    let doc = document();
    assert_eq!(
        doc.get_element_by_id("photo").unwrap().get_attribute("loading").as_deref(),
        Some("lazy")
    );
    assert!(doc.get_element_by_id("logo").unwrap().get_attribute("loading").is_none());
    assert_eq!(
        doc.get_element_by_id("eager").unwrap().get_attribute("loading").as_deref(),
        Some("eager")
    );
}

#[wasm_bindgen_test]
fn menu_toggle_syncs_dom_state() {
    set_body(
        "<header>\
           <button class=\"navbar-toggler\" aria-expanded=\"false\"></button>\
           <div class=\"navbar-collapse\"><a class=\"nav-link\" href=\"#top\">Top</a></div>\
         </header>",
    );
    let doc = document();
    site_ui::menu::init(&doc).unwrap();

    let toggler = doc
        .query_selector(".navbar-toggler")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let panel = doc.query_selector(".navbar-collapse").unwrap().unwrap();
    let body = doc.body().unwrap();

    toggler.click();
    assert!(panel.class_list().contains("show"));
    assert_eq!(toggler.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(body.class_list().contains("u-no-scroll"));

    toggler.click();
    assert!(!panel.class_list().contains("show"));
    assert_eq!(toggler.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!body.class_list().contains("u-no-scroll"));
}

#[wasm_bindgen_test]
fn escape_closes_the_open_menu() {
    set_body(
        "<header>\
           <button class=\"navbar-toggler\"></button>\
           <div class=\"navbar-collapse\"></div>\
         </header>",
    );
    let doc = document();
    site_ui::menu::init(&doc).unwrap();

    let toggler = doc
        .query_selector(".navbar-toggler")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let panel = doc.query_selector(".navbar-collapse").unwrap().unwrap();

    toggler.click();
    assert!(panel.class_list().contains("show"));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&escape).unwrap();

    assert!(!panel.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn blur_shows_inline_error_and_input_clears_it() {
    set_body(
        "<form>\
           <div><input id=\"contactEmail\" type=\"email\" required></div>\
           <button type=\"submit\">Senden</button>\
         </form>",
    );
    let doc = document();
    site_ui::form::init(&doc).unwrap();

    let field = doc
        .get_element_by_id("contactEmail")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();

    field.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    assert!(field.class_list().contains("is-invalid"));
    let feedback = doc.query_selector(".invalid-feedback").unwrap().unwrap();
    assert_eq!(
        feedback.text_content().as_deref(),
        Some(site_ui::validate::MSG_REQUIRED)
    );

    field.set_value("a@b.c");
    field.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert!(!field.class_list().contains("is-invalid"));
}

#[wasm_bindgen_test]
fn invalid_submit_is_blocked_and_shows_a_banner() {
    set_body(
        "<form>\
           <div><input id=\"firstName\" type=\"text\" required></div>\
           <button type=\"submit\">Senden</button>\
         </form>",
    );
    let doc = document();
    site_ui::form::init(&doc).unwrap();

    let form = doc.query_selector("form").unwrap().unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert!(doc.query_selector(".alert.alert-error").unwrap().is_some());
    let field = doc.get_element_by_id("firstName").unwrap();
    assert!(field.class_list().contains("is-invalid"));
    // submit control stays enabled on a failed submit
    let button = doc.query_selector("[type=\"submit\"]").unwrap().unwrap();
    assert!(button.get_attribute("disabled").is_none());
}

#[wasm_bindgen_test]
fn reveal_targets_are_primed_invisible() {
    set_body("<p id=\"copy\">Hallo</p>");
    let doc = document();
    site_ui::scroll_effects::init(&doc).unwrap();

    let copy = doc
        .get_element_by_id("copy")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(copy.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(
        copy.style().get_property_value("transform").unwrap(),
        "translateY(30px)"
    );
}

#[wasm_bindgen_test]
async fn counted_counter_does_not_animate_again() {
    set_body("<span id=\"stat\" data-count=\"1000\" data-counted=\"true\">0</span>");
    let doc = document();
    site_ui::scroll_effects::init(&doc).unwrap();

    // long enough for the observer to fire and an animation to have visibly
    // advanced past zero if the guard were broken
    gloo_timers::future::TimeoutFuture::new(300).await;

    let stat = doc.get_element_by_id("stat").unwrap();
    assert_eq!(stat.text_content().as_deref(), Some("0"));
}

#[wasm_bindgen_test]
async fn debounce_coalesces_rapid_triggers() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let debounced = site_ui::timing::debounce(50, move || counter.set(counter.get() + 1));

    debounced();
    debounced();
    debounced();
    gloo_timers::future::TimeoutFuture::new(150).await;

    assert_eq!(calls.get(), 1);
}
