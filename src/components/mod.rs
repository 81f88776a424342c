//! UI Components
//!
//! Leptos components for the storefront and its overlays.

mod auth_modal;
mod collections;
mod filter_bar;
mod item_grid;
mod listing_modal;
mod locker_dashboard;
mod nav_bar;
mod product_modal;
mod seller_modal;

pub use auth_modal::AuthModal;
pub use collections::Collections;
pub use filter_bar::FilterBar;
pub use item_grid::ItemGrid;
pub use listing_modal::ListingModal;
pub use locker_dashboard::LockerDashboard;
pub use nav_bar::NavBar;
pub use product_modal::ProductModal;
pub use seller_modal::SellerModal;
