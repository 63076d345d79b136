use leptos::*;

use gajanand_catalog::{Catalog, Gallery, Product};
use gajanand_core::Entity;

use crate::content::products;
use crate::frontend::app::use_config;
use crate::frontend::components::Carousel;
use crate::routes::Route as NavRoute;

fn bullet_list(title: &'static str, icon: &'static str, items: &[String]) -> impl IntoView {
    (!items.is_empty()).then(|| {
        let items = items
            .iter()
            .map(|item| view! { <li>{item.clone()}</li> })
            .collect_view();
        view! {
            <div class="product-block">
                <h3><span class="icon">{icon}</span>{title}</h3>
                <ul class="bullets">{items}</ul>
            </div>
        }
    })
}

#[component]
fn ProductSection(product: &'static Product, gallery: RwSignal<Gallery<'static>>) -> impl IntoView {
    let config = use_config();

    let carousel = (!product.images().is_empty()).then(|| {
        view! { <Carousel product=product gallery=gallery asset_root=config.asset_root.clone()/> }
    });

    view! {
        <section id=product.id().as_str() class="product">
            <h2>{product.title()}</h2>
            <p class="product-description">{product.description()}</p>

            <div class="product-columns">
                {bullet_list("Applications", "📍", product.applications())}
                {bullet_list("Features", "⭐", product.features())}
            </div>

            {carousel}

            {bullet_list("Operation Options", "⚙️", product.operation_options())}
            {bullet_list("Bending Available In", "🔄", product.bending_available())}
            {bullet_list("Track Length:", "📏", product.track_length_notes())}
        </section>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = Catalog::standard();
    let gallery = create_rw_signal(Gallery::new(catalog));

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{products::TITLE}</h1>
                <p>{products::INTRO}</p>
                <p>{products::STOCK_LENGTHS}</p>
            </div>
        </section>

        <div class="container">
            {catalog
                .products()
                .iter()
                .map(|product| view! { <ProductSection product=product gallery=gallery/> })
                .collect_view()}
        </div>

        <nav class="container quick-nav">
            <h3>"Quick Navigation"</h3>
            <div class="quick-nav-links">
                {catalog
                    .products()
                    .iter()
                    .map(|product| view! {
                        <a href=NavRoute::Products.href_with_anchor(product.id().as_str())>{product.quick_nav_label()}</a>
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
