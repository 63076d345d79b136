use leptos::*;
use leptos_router::use_location;

use gajanand_catalog::ImageRef;

use crate::content::home;
use crate::frontend::app::{use_config, use_theme};
use crate::frontend::browser;
use crate::layout::header_is_solid;
use crate::routes::Route as NavRoute;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let pathname = use_location().pathname;

    let menu_open = create_rw_signal(false);
    let scroll_y = create_rw_signal(browser::scroll_y());
    let threshold = config.header_scroll_threshold;

    let listener = window_event_listener(ev::scroll, move |_| scroll_y.set(browser::scroll_y()));
    on_cleanup(move || listener.remove());

    // any navigation closes the mobile menu
    create_effect(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let header_class = move || {
        if header_is_solid(scroll_y.get(), threshold, menu_open.get()) {
            "site-header solid"
        } else {
            "site-header"
        }
    };

    let logo = ImageRef::new("/logo.svg").resolve(&config.asset_root);
    let logo_alt = format!("{} Logo", config.site_name);

    let nav_links = move |class: &'static str| {
        NavRoute::ALL
            .into_iter()
            .map(|route| {
                let link_class = move || {
                    if route.is_active(&pathname.get()) {
                        format!("{class} active")
                    } else {
                        class.to_string()
                    }
                };
                view! {
                    <a href=route.path() class=link_class>
                        {route.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="container header-bar">
                <a href=NavRoute::Home.path() class="brand">
                    <img src=logo alt=logo_alt class="brand-logo"/>
                    <div>
                        <h1 class="brand-name">{config.site_name.clone()}</h1>
                        <p class="brand-tagline">{home::TAGLINE}</p>
                    </div>
                </a>

                <nav class="nav-desktop">{nav_links("nav-link")}</nav>

                <div class="header-actions">
                    <button
                        class="theme-toggle"
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| theme.update(|t| *t = t.toggle())
                    >
                        {move || match theme.get() {
                            crate::Theme::Light => "☾",
                            crate::Theme::Dark => "☀",
                        }}
                    </button>
                    <button
                        class="menu-toggle"
                        class:open=move || menu_open.get()
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">{nav_links("nav-link-mobile")}</nav>
            </Show>
        </header>
    }
}
