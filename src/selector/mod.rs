//! Structural selectors for content finding and navigation detection.
//!
//! `content` locates the single element that best represents the page's main
//! content; `sidebar` holds the shared predicate that marks chrome
//! (headers, footers, primary menus) as unusable for both content selection
//! and sibling-page harvesting.

pub mod content;
pub mod sidebar;

pub use content::select_content_region;
pub use sidebar::is_skippable_nav;
