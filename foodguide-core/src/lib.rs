//! Food Guide Core
//!
//! Platform-agnostic logic for the regional food guide: the catalog model and
//! its decoding, region filtering, rating display, and the overlay state
//! machine that drives the detail modal and image viewer.
//! This crate has no DOM or UI framework dependencies.

pub mod catalog;
pub mod filter;
mod lenient;
pub mod page;
pub mod rating;
pub mod store;
pub mod text;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, DetailedInfo, FoodId, FoodItem, RegionEntry};
pub use filter::{ALL_REGIONS, Listing, RegionFilter, select};
pub use page::{PageAction, PageModel};
pub use rating::{format_rating, star_glyphs};
pub use store::{CatalogError, CatalogStore};
pub use text::{CARD_EXCERPT_CHARS, CARD_SPECIALTY_LIMIT, card_specialties, excerpt};
pub use view::{ViewAction, ViewState};
