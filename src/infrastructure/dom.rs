use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::domain::{content::Section, logging::LogComponent};
use crate::log_warn;

/// Smooth-scrolls to the section's anchor element. A missing anchor is logged and ignored.
pub fn scroll_to_section(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor()))
    else {
        log_warn!(
            LogComponent::Infrastructure("Dom"),
            "Anchor '#{}' not found in document",
            section.anchor()
        );
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Locks page scrolling while a modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if body.style().set_property("overflow", value).is_err() {
            log_warn!(LogComponent::Infrastructure("Dom"), "Failed to toggle body scroll lock");
        }
    }
}

/// Milliseconds since page load, for animations.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
