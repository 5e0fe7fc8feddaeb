//! User interface rendering layer.
//!
//! Transforms view models into ANSI-styled output through small rendering
//! components, with TOML theme support and search-match highlighting.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, widths)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, FiltersInfo, FooterInfo, HeaderInfo, ImageInfo, PaginationInfo, PickerInfo,
    ProductCard, SearchBarInfo, StatusInfo, StatusKind, UIViewModel,
};
