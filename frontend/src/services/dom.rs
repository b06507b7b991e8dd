//! Document-level side effects: theme variables, scrolling and the
//! system color-scheme preference.

use crate::services::logging::Logger;
use shared::ThemeColors;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the browser reports a dark color-scheme preference
pub fn prefers_dark_scheme() -> bool {
    match gloo::utils::window().match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(_) => {
            Logger::warn_with_component("dom", "matchMedia is not available");
            false
        }
    }
}

/// Write the theme's color pair into the root element's CSS variables
pub fn apply_theme(colors: ThemeColors) {
    let Some(root) = gloo::utils::document()
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        Logger::error_with_component("dom", "document has no root element to theme");
        return;
    };

    let style = root.style();
    for (property, value) in colors.css_properties() {
        if style.set_property(property, &value).is_err() {
            Logger::error_with_component("dom", &format!("failed to set {}", property));
        }
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo::utils::window().scroll_to_with_scroll_to_options(&options);
}
