//! Ordered, id-unique product table.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use gajanand_core::{DomainError, DomainResult, Entity};

use crate::data;
use crate::product::{Product, ProductId};

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| match data::products() {
    Ok(products) => Catalog::new(products).unwrap_or_else(|err| {
        tracing::error!(error = %err, "built-in catalog is inconsistent; rendering no products");
        Catalog::default()
    }),
    Err(err) => {
        tracing::error!(error = %err, "built-in catalog entry is malformed; rendering no products");
        Catalog::default()
    }
});

/// The products shown on the Products page, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = BTreeSet::new();
        for product in &products {
            if !seen.insert(product.id().clone()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id: {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// The distributor's built-in catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Resolve a URL fragment (`#ks-type` or `ks-type`) to a product.
    pub fn resolve_anchor(&self, fragment: &str) -> Option<&Product> {
        let anchor = fragment.strip_prefix('#').unwrap_or(fragment);
        if anchor.is_empty() {
            return None;
        }
        self.products.iter().find(|p| p.id().as_str() == anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::builder(id).title(format!("{id} title")).build().unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product("ks-type"), product("ks-type")]).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("ks-type")),
            _ => panic!("Expected Validation error for duplicate id"),
        }
    }

    #[test]
    fn resolve_anchor_accepts_hash_prefix() {
        let catalog = Catalog::new(vec![product("ks-type"), product("ds-type")]).unwrap();
        assert_eq!(catalog.resolve_anchor("#ds-type").unwrap().id().as_str(), "ds-type");
        assert_eq!(catalog.resolve_anchor("ks-type").unwrap().id().as_str(), "ks-type");
        assert!(catalog.resolve_anchor("#").is_none());
        assert!(catalog.resolve_anchor("").is_none());
        assert!(catalog.resolve_anchor("#unknown").is_none());
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::new(vec![product("japanese")]).unwrap();
        let id = ProductId::parse("japanese").unwrap();
        assert!(catalog.get(&id).is_some());
        assert!(catalog.get(&ProductId::parse("motorized").unwrap()).is_none());
    }

    #[test]
    fn standard_catalog_is_valid_and_ordered() {
        // Rebuild through the validating path so a malformed literal fails here
        // instead of silently rendering an empty page.
        let rebuilt = Catalog::new(data::products().unwrap()).unwrap();
        assert_eq!(&rebuilt, Catalog::standard());

        let ids: Vec<_> = Catalog::standard()
            .products()
            .iter()
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "regular-roman-blind",
                "tubeless-roman-blind",
                "ks-type",
                "ds-type",
                "japanese",
                "motorized",
                "bendable",
            ]
        );
    }

    #[test]
    fn standard_catalog_optional_sections() {
        let catalog = Catalog::standard();

        let motorized = catalog.resolve_anchor("motorized").unwrap();
        assert!(motorized.operation_options().is_empty());
        assert_eq!(motorized.images().len(), 8);

        let bendable = catalog.resolve_anchor("bendable").unwrap();
        assert_eq!(bendable.images().len(), 2);
        assert_eq!(
            bendable.bending_available(),
            [
                "Motorized Curtain Tracks",
                "KS Curtain Tracks",
                "Japanese Curtain Tracks"
            ]
        );
        assert_eq!(bendable.track_length_notes().len(), 2);

        let others_with_bending = catalog
            .products()
            .iter()
            .filter(|p| !p.bending_available().is_empty())
            .count();
        assert_eq!(others_with_bending, 1);
    }
}
