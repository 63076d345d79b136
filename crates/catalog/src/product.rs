use serde::{Deserialize, Serialize};

use gajanand_core::{DomainError, DomainResult, Entity, Slug, ValueObject};

/// Product identifier; doubles as the `#fragment` anchor on the Products page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Slug);

impl ProductId {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Ok(Self(Slug::parse(raw)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Path of a product photo relative to the static asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    /// Join this path onto `asset_root`, with exactly one `/` between them.
    ///
    /// An empty root yields a root-relative path (`/Motors/...`).
    pub fn resolve(&self, asset_root: &str) -> String {
        let root = asset_root.trim_end_matches('/');
        let path = self.0.trim_start_matches('/');
        format!("{root}/{path}")
    }
}

impl ValueObject for ImageRef {}

/// A static catalog entry describing one hardware line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    applications: Vec<String>,
    features: Vec<String>,
    operation_options: Vec<String>,
    bending_available: Vec<String>,
    track_length_notes: Vec<String>,
    images: Vec<ImageRef>,
}

impl Product {
    pub fn builder(id: &str) -> ProductBuilder {
        ProductBuilder::new(id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn applications(&self) -> &[String] {
        &self.applications
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn operation_options(&self) -> &[String] {
        &self.operation_options
    }

    /// Product lines a bendable track can be supplied in.
    pub fn bending_available(&self) -> &[String] {
        &self.bending_available
    }

    pub fn track_length_notes(&self) -> &[String] {
        &self.track_length_notes
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Short label for the quick-navigation strip: the first two words of the title.
    pub fn quick_nav_label(&self) -> String {
        self.title
            .split(' ')
            .filter(|w| !w.is_empty())
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Builder for literal catalog entries.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    id: String,
    title: String,
    description: String,
    applications: Vec<String>,
    features: Vec<String>,
    operation_options: Vec<String>,
    bending_available: Vec<String>,
    track_length_notes: Vec<String>,
    images: Vec<ImageRef>,
}

fn owned<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl ProductBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            applications: Vec::new(),
            features: Vec::new(),
            operation_options: Vec::new(),
            bending_available: Vec::new(),
            track_length_notes: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn applications<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applications = owned(items);
        self
    }

    pub fn features<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = owned(items);
        self
    }

    pub fn operation_options<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operation_options = owned(items);
        self
    }

    pub fn bending_available<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bending_available = owned(items);
        self
    }

    pub fn track_length_notes<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.track_length_notes = owned(items);
        self
    }

    pub fn images<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = paths.into_iter().map(ImageRef::new).collect();
        self
    }

    pub fn build(self) -> DomainResult<Product> {
        let id = ProductId::parse(&self.id)?;

        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {id} has an empty title"
            )));
        }

        if let Some(blank) = self.images.iter().find(|img| img.path().trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "product {id} has a blank image path ({blank:?})"
            )));
        }

        Ok(Product {
            id,
            title: self.title,
            description: self.description,
            applications: self.applications,
            features: self.features,
            operation_options: self.operation_options,
            bending_available: self.bending_available,
            track_length_notes: self.track_length_notes,
            images: self.images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_keeps_list_order() {
        let product = Product::builder("ks-type")
            .title("KS Type Curtain Tracks")
            .features(["Slim aluminium profile", "Smooth runner movement"])
            .images(["/a.jpg", "/b.jpg"])
            .build()
            .unwrap();

        assert_eq!(product.id().as_str(), "ks-type");
        assert_eq!(
            product.features(),
            ["Slim aluminium profile", "Smooth runner movement"]
        );
        assert_eq!(product.images()[1].path(), "/b.jpg");
        assert!(product.operation_options().is_empty());
    }

    #[test]
    fn build_rejects_empty_title() {
        let err = Product::builder("ks-type").title("   ").build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty title"),
        }
    }

    #[test]
    fn build_rejects_bad_id() {
        let err = Product::builder("KS Type").title("KS").build().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for non-slug id"),
        }
    }

    #[test]
    fn build_rejects_blank_image_path() {
        let err = Product::builder("ks-type")
            .title("KS")
            .images(["/a.jpg", " "])
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn quick_nav_label_takes_two_words() {
        let product = Product::builder("bendable")
            .title("Bendable & Geometric Curtain Tracks (Up to 360°)")
            .build()
            .unwrap();
        assert_eq!(product.quick_nav_label(), "Bendable &");

        let single = Product::builder("motors").title("Motors").build().unwrap();
        assert_eq!(single.quick_nav_label(), "Motors");
    }

    #[test]
    fn image_resolve_joins_with_single_slash() {
        let img = ImageRef::new("/Motors/Novo Motors/NOVO Motors (2).jpeg");
        assert_eq!(img.resolve(""), "/Motors/Novo Motors/NOVO Motors (2).jpeg");
        assert_eq!(
            img.resolve("https://cdn.example.com/assets/"),
            "https://cdn.example.com/assets/Motors/Novo Motors/NOVO Motors (2).jpeg"
        );
        assert_eq!(ImageRef::new("logo.svg").resolve("/static"), "/static/logo.svg");
    }
}
