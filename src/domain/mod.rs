//! Domain layer for the zcatalog plugin.
//!
//! Core catalog types, independent of Zellij APIs and of how products are
//! fetched or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`product`]: Product model as served by the catalog API
//! - [`filter`]: Filter state, sort keys and the filter transition function
//! - [`carousel`]: Per-product image carousel positions

pub mod carousel;
pub mod error;
pub mod filter;
pub mod product;

pub use carousel::{CarouselDirection, ImageCarousel};
pub use error::{CatalogError, FetchError, Result};
pub use filter::{FilterChange, FilterState, SortDirection, SortField, SortKey, PAGE_SIZE};
pub use product::{Product, ProductId};
