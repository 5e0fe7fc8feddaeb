//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar with the current location.
    pub header: HeaderInfo,

    /// Active category, sort and search summary.
    pub filters: FiltersInfo,

    /// Search input box (only while typing a search).
    pub search_bar: Option<SearchBarInfo>,

    /// Main area: product cards, a status message or the category picker.
    pub body: BodyView,

    /// Previous/next page control (hidden while loading or on error).
    pub pagination: Option<PaginationInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// What occupies the main area of the pane.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// Windowed list of product cards.
    Products {
        cards: Vec<ProductCard>,
        /// Index of the selected card within `cards`.
        selected_index: usize,
    },
    /// Loading, error or empty-result message.
    Status(StatusInfo),
    /// Category picker overlay.
    Picker(PickerInfo),
}

/// Display information for a single product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,

    /// Character ranges of `title` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Formatted price, e.g. `$4.50`.
    pub price: String,

    /// Formatted rating, e.g. `Rating: 4.2`.
    pub rating: String,

    pub category: String,

    /// Comma-joined tags.
    pub tags: String,

    /// Image currently shown by the card's carousel.
    pub image: Option<ImageInfo>,

    pub is_selected: bool,
}

/// The carousel's current image for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub url: String,
    /// One-based position within the product's images.
    pub position: usize,
    pub count: usize,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
    /// Current location, rendered as `?query`.
    pub location: String,
}

/// Summary of the active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersInfo {
    pub category: String,
    pub sort: String,
    /// Submitted search term, if any.
    pub search: Option<String>,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current contents of the search input buffer.
    pub query: String,
}

/// Kind of status message shown instead of product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

/// Status message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub kind: StatusKind,
    /// Primary message.
    pub message: String,
    /// Secondary line; for errors this is the go-back control.
    pub subtitle: String,
}

/// Pagination control display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
    /// Optional range summary such as `21-40 of 45`.
    pub summary: Option<String>,
}

/// Category picker display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerInfo {
    /// "All Categories" followed by the fetched categories.
    pub options: Vec<String>,
    /// Highlighted option.
    pub cursor: usize,
    /// Option matching the active category.
    pub active: usize,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
