//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use crate::config::SiteConfig;
use crate::frontend::browser;
use crate::frontend::components::{Footer, Header, ScrollToTop};
use crate::frontend::pages::{AboutPage, ContactPage, HomePage, ProductsPage};
use crate::theme::Theme;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    tracing::info!(
        asset_root = %config.asset_root,
        recipient = %config.compose.recipient,
        "site starting"
    );

    let theme = create_rw_signal(browser::preferred_theme());
    create_effect(move |_| browser::apply_theme(theme.get()));

    provide_context(config);
    provide_context(theme);

    view! {
        <Router>
            <ScrollToTop/>
            <div class="app">
                <Header/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/products" view=ProductsPage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/contact" view=ContactPage/>
                        // unknown paths render Home
                        <Route path="/*any" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Site configuration provided by [`App`].
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Theme signal provided by [`App`].
pub fn use_theme() -> RwSignal<Theme> {
    use_context::<RwSignal<Theme>>().unwrap_or_else(|| create_rw_signal(Theme::default()))
}
