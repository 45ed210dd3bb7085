use crate::constants::CLOSE_BUTTON_ID;
use crate::core::{SceneEvent, SceneObserver};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// The DOM close button, toggled by focus notifications.
pub struct CloseControl {
    document: web::Document,
}

impl CloseControl {
    /// Wrap `document` and make sure the button starts hidden.
    pub fn new(document: web::Document) -> Self {
        if !is_hidden(&document, CLOSE_BUTTON_ID) {
            hide(&document, CLOSE_BUTTON_ID);
        }
        Self { document }
    }
}

impl SceneObserver for CloseControl {
    fn notify(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::ShowCloseControl { ring } => {
                log::info!("[ui] show close control for ring {}", ring);
                show(&self.document, CLOSE_BUTTON_ID);
            }
            SceneEvent::HideCloseControl { ring } => {
                log::info!("[ui] hide close control after ring {}", ring);
                hide(&self.document, CLOSE_BUTTON_ID);
            }
        }
    }
}
