use leptos::*;
use leptos_router::use_location;

use crate::frontend::browser;

/// Scrolls to the top on every navigation, or to the product named by the
/// location fragment.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        let hash = location.hash.get();
        let target = format!(
            "{}#{}",
            location.pathname.get(),
            hash.trim_start_matches('#')
        );
        // wait for the routed page to render before looking up the anchor
        request_animation_frame(move || browser::scroll_for_location(&target));
    });
}
