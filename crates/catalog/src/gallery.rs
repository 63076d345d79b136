//! Arena of independent carousels, one per product card.

use std::collections::BTreeMap;

use gajanand_core::{DomainError, DomainResult, Entity, StateMachine};

use crate::carousel::{CarouselCommand, CarouselEvent, CarouselState};
use crate::catalog::Catalog;
use crate::product::ProductId;

/// Carousel state for every card on the Products page, keyed by product id.
///
/// Commands are routed to exactly one carousel; siblings never observe them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery<'a> {
    carousels: BTreeMap<ProductId, CarouselState<'a>>,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let carousels = catalog
            .products()
            .iter()
            .map(|p| (p.id().clone(), CarouselState::new(p.images())))
            .collect();
        Self { carousels }
    }

    pub fn get(&self, id: &ProductId) -> Option<&CarouselState<'a>> {
        self.carousels.get(id)
    }

    pub fn dispatch(
        &mut self,
        id: &ProductId,
        command: CarouselCommand,
    ) -> DomainResult<Vec<CarouselEvent>> {
        let carousel = self
            .carousels
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("carousel for product {id}")))?;

        let events = carousel.execute(&command)?;
        for event in &events {
            let CarouselEvent::SlideChanged { from, to } = event;
            tracing::debug!(product = %id, from, to, "carousel slide changed");
        }
        Ok(events)
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }
}
