//! Thin wrappers over `web_sys` used by the components.

use gajanand_catalog::Catalog;
use gajanand_contact::{ComposeDispatcher, DispatchError};
use gajanand_core::Entity;

use crate::routes::split_location;
use crate::theme::Theme;

/// Opens compose links through the real browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDispatcher;

impl ComposeDispatcher for BrowserDispatcher {
    fn open_new_context(&self, url: &str) -> Result<(), DispatchError> {
        let window =
            web_sys::window().ok_or_else(|| DispatchError::OpenFailed("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // a popup blocker returns null instead of throwing
            Ok(None) => Err(DispatchError::OpenFailed("popup blocked".to_string())),
            Err(err) => Err(DispatchError::OpenFailed(format!("{err:?}"))),
        }
    }

    fn navigate_current(&self, url: &str) -> Result<(), DispatchError> {
        let window = web_sys::window()
            .ok_or_else(|| DispatchError::NavigationFailed("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|err| DispatchError::NavigationFailed(format!("{err:?}")))
    }
}

pub fn preferred_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    Theme::from_preference(prefers_dark)
}

/// Put the theme class on `<html>` so every page picks it up.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1(Theme::Dark.class());
    if !theme.class().is_empty() {
        let _ = classes.add_1(theme.class());
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Bring a product anchor into view, or go back to the top of the page.
pub fn scroll_for_location(location: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let (_, fragment) = split_location(location);
    let target = fragment
        .and_then(|fragment| Catalog::standard().resolve_anchor(fragment))
        .and_then(|product| {
            window
                .document()
                .and_then(|d| d.get_element_by_id(product.id().as_str()))
        });

    match target {
        Some(element) => element.scroll_into_view(),
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}
