use leptos::*;

use gajanand_catalog::{CarouselCommand, CarouselEvent, Gallery, Product};
use gajanand_core::Entity;

/// Image carousel for one product card, backed by the page's [`Gallery`].
#[component]
pub fn Carousel(
    product: &'static Product,
    gallery: RwSignal<Gallery<'static>>,
    asset_root: String,
) -> impl IntoView {
    let id = store_value(product.id().clone());
    let title = product.title();

    // per-card memo: siblings' slide changes compare equal here and notify nothing
    let state = create_memo(move |_| gallery.with(|g| id.with_value(|id| g.get(id).copied())));
    let shown = create_rw_signal(0usize);

    let send = move |command: CarouselCommand| {
        let mut events = Vec::new();
        gallery.update(|g| {
            id.with_value(|id| match g.dispatch(id, command) {
                Ok(emitted) => events = emitted,
                Err(err) => {
                    tracing::warn!(product = %id, error = %err, "carousel command rejected");
                }
            })
        });
        for event in events {
            let CarouselEvent::SlideChanged { to, .. } = event;
            shown.set(to);
        }
    };

    let slide = move || {
        let index = shown.get();
        let alt = state.with_untracked(|s| s.map(|c| c.alt_text(title)))?;
        product.images().get(index).map(|image| {
            let src = image.resolve(&asset_root);
            // a fresh element per slide change restarts the fade-in
            view! { <img src=src alt=alt class="carousel-image fade-in" loading="lazy"/> }
        })
    };

    let navigation = move || state.get().is_some_and(|c| c.has_navigation());

    view! {
        <div class="carousel">
            <div class="carousel-frame">{slide}</div>

            <Show when=navigation>
                <button
                    class="carousel-arrow prev"
                    aria-label="Previous image"
                    on:click=move |_| send(CarouselCommand::Previous)
                >
                    "‹"
                </button>
                <button
                    class="carousel-arrow next"
                    aria-label="Next image"
                    on:click=move |_| send(CarouselCommand::Next)
                >
                    "›"
                </button>

                <div class="carousel-dots">
                    {move || {
                        state
                            .get()
                            .map(|c| c.indicators())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|dot| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=dot.active
                                        aria-label=format!("Go to image {}", dot.index + 1)
                                        on:click=move |_| send(CarouselCommand::GoTo(dot.index))
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="carousel-counter">
                    {move || state.get().and_then(|c| c.position()).map(|(n, len)| format!("{n} / {len}"))}
                </div>
            </Show>
        </div>
    }
}
