//! Shared UI crate for Newsgrid. The news view, theme and platform glue live here.

pub mod core;
pub mod news;
pub mod theme;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
