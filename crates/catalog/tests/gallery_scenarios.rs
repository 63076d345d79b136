//! Carousel behavior against the built-in catalog.

use gajanand_catalog::{CarouselCommand, CarouselEvent, CarouselState, Catalog, Gallery, ImageRef, ProductId};
use gajanand_core::Entity;

#[test]
fn three_image_carousel_wraps_backwards_then_forwards() {
    let images: Vec<ImageRef> = ["/a.jpg", "/b.jpg", "/c.jpg"]
        .into_iter()
        .map(ImageRef::new)
        .collect();

    let state = CarouselState::new(&images);
    assert_eq!(state.current_index(), 0);

    let state = state.previous();
    assert_eq!(state.current_index(), 2);

    let state = state.next().next();
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.current().unwrap().path(), "/b.jpg");
}

#[test]
fn zero_image_carousel_has_no_affordances() {
    let images: Vec<ImageRef> = Vec::new();
    let state = CarouselState::new(&images);

    assert!(!state.has_navigation());
    assert!(state.indicators().is_empty());
    assert_eq!(state.next().current_index(), 0);
    assert_eq!(state.previous().current_index(), 0);
}

#[test]
fn every_standard_product_gets_an_independent_carousel() {
    let catalog = Catalog::standard();
    let mut gallery = Gallery::new(catalog);
    assert_eq!(gallery.len(), catalog.len());

    let ks = ProductId::parse("ks-type").unwrap();
    let events = gallery.dispatch(&ks, CarouselCommand::GoTo(7)).unwrap();
    assert_eq!(events, [CarouselEvent::SlideChanged { from: 0, to: 7 }]);

    for product in catalog.products() {
        let expected = if product.id() == &ks { 7 } else { 0 };
        assert_eq!(gallery.get(product.id()).unwrap().current_index(), expected);
    }
}

#[test]
fn dots_only_emitted_for_valid_slides() {
    let catalog = Catalog::standard();
    let mut gallery = Gallery::new(catalog);
    let bendable = ProductId::parse("bendable").unwrap();

    let dots = gallery.get(&bendable).unwrap().indicators();
    assert_eq!(dots.len(), 2);
    for dot in dots {
        gallery
            .dispatch(&bendable, CarouselCommand::GoTo(dot.index))
            .unwrap();
        assert_eq!(gallery.get(&bendable).unwrap().current_index(), dot.index);
    }
}
