//! Transient banner notifications, fixed to the top-right corner.

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;

use crate::{config, dom};

#[derive(Debug, Clone, Copy)]
pub enum Flavor {
    Error,
    Info,
}

impl Flavor {
    fn as_class(self) -> &'static str {
        match self {
            Flavor::Error => "error",
            Flavor::Info => "info",
        }
    }
}

/// Appends a dismissible alert to `<body>`. The close button removes it
/// immediately; otherwise it auto-dismisses after a fixed lifetime. Failures
/// to build the banner are swallowed, a missed notification is not worth
/// surfacing.
pub fn show(message: &str, flavor: Flavor) {
    let Ok(document) = dom::document() else { return };
    let Ok(body) = dom::body() else { return };
    let Ok(banner) = document.create_element("div") else {
        return;
    };

    banner.set_class_name(&format!(
        "alert alert-{} alert-dismissible fade show",
        flavor.as_class()
    ));
    let _ = banner.set_attribute(
        "style",
        "position:fixed;top:20px;right:20px;z-index:9999;max-width:400px;box-shadow:var(--shadow-lg);",
    );
    banner.set_inner_html(&format!(
        "{message}<button type=\"button\" class=\"btn-close\"></button>"
    ));

    if let Ok(Some(close)) = banner.query_selector(".btn-close") {
        let banner = banner.clone();
        let _ = dom::listen(&close, "click", move |_: MouseEvent| {
            banner.remove();
        });
    }

    if body.append_child(&banner).is_ok() {
        Timeout::new(config::NOTIFICATION_LIFETIME_MS, move || {
            if banner.parent_node().is_some() {
                banner.remove();
            }
        })
        .forget();
    }
}
