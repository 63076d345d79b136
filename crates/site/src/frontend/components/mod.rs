mod carousel;
mod footer;
mod header;
mod scroll;

pub use carousel::Carousel;
pub use footer::Footer;
pub use header::Header;
pub use scroll::ScrollToTop;
