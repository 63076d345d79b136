mod about;
mod contact;
mod home;
mod products;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use products::ProductsPage;
