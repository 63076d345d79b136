use leptos::*;

use crate::content::home;
use crate::routes::Route as NavRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1>{home::TAGLINE}</h1>
                <p class="lead">{home::HERO}</p>
                <div class="hero-actions">
                    <a href=NavRoute::Products.path() class="button primary">"Explore Products"</a>
                    <a href=NavRoute::Contact.path() class="button">"Contact Us"</a>
                </div>
            </div>
        </section>

        <section class="intro container">
            <h2>{home::WELCOME_TITLE}</h2>
            <p>{home::WELCOME}</p>
        </section>

        <section class="categories container">
            <h2>{home::CATEGORIES_TITLE}</h2>
            <p class="subtitle">{home::CATEGORIES_SUBTITLE}</p>
            <div class="card-grid">
                {home::CATEGORIES
                    .into_iter()
                    .map(|category| {
                        view! {
                            <a href=NavRoute::Products.href_with_anchor(category.anchor) class="card">
                                <h3>{category.name}</h3>
                                <p>{category.description}</p>
                                <span class="card-more">"Learn more →"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta">
            <div class="container">
                <h2>{home::CTA_TITLE}</h2>
                <p>{home::CTA}</p>
                <a href=NavRoute::Contact.path() class="button primary">"Get in Touch"</a>
            </div>
        </section>
    }
}
