//! Deferred media loading and broken-image recovery.

use web_sys::{Document, Event};

use crate::error::Result;
use crate::{config, dom};

pub fn init(document: &Document) -> Result<()> {
    // The logo must load eagerly, everything else can wait.
    for img in dom::query_all(document, "img:not([loading])") {
        if !img.class_list().contains("c-logo__img") {
            let _ = img.set_attribute("loading", "lazy");
        }
    }
    for video in dom::query_all(document, "video:not([loading])") {
        let _ = video.set_attribute("loading", "lazy");
    }

    for img in dom::query_all(document, "img") {
        let target = img.clone();
        dom::listen(&img, "error", move |_: Event| {
            let _ = target.set_attribute("src", config::IMAGE_PLACEHOLDER);
        })?;
    }
    Ok(())
}
