use leptos::*;

use crate::content::about;

#[component]
pub fn AboutPage() -> impl IntoView {
    let paragraphs = |items: &'static [&'static str]| {
        items.iter().map(|text| view! { <p>{*text}</p> }).collect_view()
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{about::TITLE}</h1>
            </div>
        </section>

        <section class="container prose">
            <h2>"Our Journey"</h2>
            {paragraphs(&about::JOURNEY)}

            <h2>"Our Specialization"</h2>
            {paragraphs(&about::SPECIALIZATION)}
        </section>

        <section class="container">
            <h2>"Our Product Range"</h2>
            <div class="card-grid">
                {about::PRODUCT_RANGE
                    .into_iter()
                    .map(|item| view! {
                        <div class="card">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="container">
            <h2>"Our Reputation"</h2>
            <p>{about::REPUTATION}</p>
            <div class="badge-row">
                {about::VALUES
                    .into_iter()
                    .map(|badge| view! {
                        <div class="badge">
                            <span class="badge-icon">{badge.icon}</span>
                            <span>{badge.title}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="container">
            <h2>"Custom Services"</h2>
            <div class="card-grid">
                {about::SERVICES
                    .into_iter()
                    .map(|item| view! {
                        <div class="card">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
