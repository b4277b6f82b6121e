// Service exports
pub mod bookmarks;
pub mod catalog;

pub use bookmarks::{BookmarkSet, SharedBookmarks};
pub use catalog::{Catalog, CatalogError};
