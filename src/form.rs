//! Per-form validation controller.
//!
//! Fields validate on blur; once a field is marked invalid it re-validates on
//! every input so the error clears as soon as the value becomes acceptable.
//! Submit validates everything, and a fully valid form disables its submit
//! control and redirects to the confirmation page after a short delay. No
//! network request is made; collected values are only HTML-escaped locally.

use std::rc::Rc;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::error::Result;
use crate::validate::{self, FieldInput, RuleSet};
use crate::{config, dom, notify};

const FIELD_SELECTOR: &str = "input, textarea, select";

pub fn init(document: &Document) -> Result<()> {
    for form in dom::query_all(document, "form") {
        if let Ok(form) = form.dyn_into::<HtmlFormElement>() {
            FormController::attach(form)?;
        }
    }
    Ok(())
}

struct FormController {
    form: HtmlFormElement,
    submit_button: Option<Element>,
    rules: &'static RuleSet,
}

impl FormController {
    fn attach(form: HtmlFormElement) -> Result<()> {
        let submit_button = form.query_selector("[type=\"submit\"]").ok().flatten();
        let controller = Rc::new(FormController {
            form,
            submit_button,
            rules: RuleSet::builtin(),
        });

        let c = Rc::clone(&controller);
        dom::listen(&controller.form, "submit", move |event: Event| {
            event.prevent_default();
            c.handle_submit();
        })?;

        for field in controller.fields() {
            let c = Rc::clone(&controller);
            let target = field.clone();
            dom::listen(&field, "blur", move |_: Event| {
                c.validate_field(&target);
            })?;

            let c = Rc::clone(&controller);
            let target = field.clone();
            dom::listen(&field, "input", move |_: Event| {
                if target.class_list().contains("is-invalid") {
                    c.validate_field(&target);
                }
            })?;
        }
        Ok(())
    }

    fn fields(&self) -> Vec<Element> {
        dom::query_all_within(&self.form, FIELD_SELECTOR)
    }

    fn validate_field(&self, field: &Element) -> bool {
        clear_error(field);
        match self.rules.check(&read_field(field)) {
            Ok(()) => true,
            Err(message) => {
                show_error(field, message);
                false
            }
        }
    }

    fn validate_all(&self) -> bool {
        let mut all_valid = true;
        for field in self.fields() {
            if !self.validate_field(&field) {
                all_valid = false;
            }
        }
        all_valid
    }

    fn handle_submit(&self) {
        if !self.validate_all() {
            notify::show("Bitte überprüfen Sie Ihre Eingaben", notify::Flavor::Error);
            return;
        }

        self.disable_submit();

        let collected = self.collect();
        log!("form valid, submitting fields:", collected.len() as u32);

        spawn_local(async move {
            TimeoutFuture::new(config::REDIRECT_DELAY_MS).await;
            if let Ok(window) = dom::window() {
                let _ = window.location().set_href(config::CONFIRMATION_URL);
            }
        });
    }

    /// Named field values, HTML-escaped. Kept local; there is no backend to
    /// send them to.
    fn collect(&self) -> Vec<(String, String)> {
        self.fields()
            .iter()
            .filter_map(|field| {
                let name = field.get_attribute("name")?;
                Some((name, validate::escape_html(&read_field(field).value)))
            })
            .collect()
    }

    fn disable_submit(&self) {
        let Some(button) = &self.submit_button else {
            return;
        };
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        } else if let Some(input) = button.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(true);
        }
        button.set_inner_html(
            "<span class=\"spinner-border spinner-border-sm me-2\"></span>Wird gesendet...",
        );
    }
}

fn read_field(field: &Element) -> FieldInput {
    let (value, input_type, checked) = if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        (input.value(), input.type_(), input.checked())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        (area.value(), String::new(), false)
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        (select.value(), String::new(), false)
    } else {
        (String::new(), String::new(), false)
    };

    FieldInput {
        role: validate::classify(&field.id(), &input_type),
        required: field.has_attribute("required"),
        value,
        checked,
    }
}

/// Marks the field invalid and writes the message into a sibling
/// `.invalid-feedback` div, creating one in the field's parent on first use.
fn show_error(field: &Element, message: &str) {
    let _ = field.class_list().add_1("is-invalid");
    let Some(parent) = field.parent_element() else {
        return;
    };

    let feedback = parent
        .query_selector(".invalid-feedback")
        .ok()
        .flatten()
        .or_else(|| {
            let document = field.owner_document()?;
            let div = document.create_element("div").ok()?;
            div.set_class_name("invalid-feedback");
            parent.append_child(&div).ok()?;
            Some(div)
        });

    if let Some(feedback) = feedback {
        feedback.set_text_content(Some(message));
        dom::set_style(&feedback, "display", "block");
    }
}

fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1("is-invalid");
    if let Some(feedback) = field
        .parent_element()
        .and_then(|parent| parent.query_selector(".invalid-feedback").ok().flatten())
    {
        dom::set_style(&feedback, "display", "none");
    }
}
