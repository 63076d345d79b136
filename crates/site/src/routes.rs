//! Route table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Products,
    About,
    Contact,
}

impl Route {
    /// Navigation order, as shown in the header and footer.
    pub const ALL: [Route; 4] = [Route::Home, Route::Products, Route::About, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products => "Products",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Match a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let (path, _) = split_location(path);
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Like [`from_path`](Self::from_path), but unknown paths render Home.
    pub fn resolve(path: &str) -> Route {
        Route::from_path(path).unwrap_or(Route::Home)
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        Route::from_path(current_path) == Some(*self)
    }

    /// `/products#ks-type`
    pub fn href_with_anchor(&self, anchor: &str) -> String {
        format!("{}#{anchor}", self.path())
    }
}

/// Split `"/products?x=1#ks-type"` into `("/products", Some("ks-type"))`.
///
/// An empty fragment (`"/products#"`) is reported as `None`.
pub fn split_location(location: &str) -> (&str, Option<&str>) {
    let (before_hash, fragment) = match location.split_once('#') {
        Some((before, frag)) => (before, (!frag.is_empty()).then_some(frag)),
        None => (location, None),
    };
    let path = before_hash
        .split_once('?')
        .map_or(before_hash, |(path, _)| path);
    (path, fragment)
}
