//! Header/footer helpers shared by every page.

use chrono::{Datelike, Local};

/// The header turns opaque once the page is scrolled or the mobile menu is open.
pub fn header_is_solid(scroll_y: f64, threshold: f64, menu_open: bool) -> bool {
    menu_open || scroll_y > threshold
}

/// Calendar year in the visitor's local time zone.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(year: i32, site_name: &str) -> String {
    format!("© {year} {site_name}. All rights reserved.")
}
