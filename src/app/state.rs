//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the filter
//! state and location history, the data fetched from the catalog API, the
//! request bookkeeping used to discard stale responses, and transient UI
//! state such as the selection cursor and input buffers.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a renderable
//! [`UIViewModel`]: it windows the product cards around the selection,
//! highlights occurrences of the submitted search term and
//! decides between cards, a status message and the category picker.

use super::modes::{InputMode, LoadState};
use crate::domain::{
    CarouselDirection, FetchError, FilterState, ImageCarousel, Product, SortKey, PAGE_SIZE,
};
use crate::gateway::{CatalogApi, ProductPage};
use crate::navigation::{build_query, History};
use crate::ui::helpers::{fit, match_ranges};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, FiltersInfo, FooterInfo, HeaderInfo, ImageInfo, PaginationInfo, PickerInfo,
    ProductCard, SearchBarInfo, StatusInfo, StatusKind, UIViewModel,
};

/// Label of the picker entry that clears the category filter.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Rows taken by a single product card.
const CARD_HEIGHT: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client used to build requests and decode responses.
    pub api: CatalogApi,

    /// Category, search term, sort key and page currently selected.
    pub filter: FilterState,

    /// Visited locations.
    pub history: History,

    /// Products on the current page.
    pub products: Vec<Product>,

    /// Every match of the active search term in display order.
    ///
    /// Empty when no search term is active.
    pub search_results: Vec<Product>,

    /// Total number of products available for the current filter, when known.
    pub total: Option<usize>,

    /// Category names fetched from the API.
    pub categories: Vec<String>,

    /// Per-product image positions for the current product list.
    pub carousel: ImageCarousel,

    /// Zero-based index of the selected product within `products`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Search input buffer; only becomes the search term when submitted.
    pub search_input: String,

    /// Highlighted entry in the category picker (0 is "All Categories").
    pub category_cursor: usize,

    /// Products request bookkeeping.
    pub load_state: LoadState,

    /// Error from the most recent products request, shown instead of the list.
    pub error: Option<FetchError>,

    /// Token of the most recently issued products request.
    pub latest_request: Option<u64>,

    /// Whether the one-time startup fetches have been issued.
    pub ready: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    next_token: u64,
}

impl AppState {
    /// Creates a state positioned at `initial_query`.
    ///
    /// Nothing is fetched until the host grants network access and the
    /// handler receives `Event::Ready`.
    #[must_use]
    pub fn new(api: CatalogApi, initial_query: &str, theme: Theme) -> Self {
        let filter = crate::navigation::parse_query(initial_query);
        let history = History::new(build_query(&filter));
        let search_input = filter.search_term.clone().unwrap_or_default();

        Self {
            api,
            filter,
            history,
            products: Vec::new(),
            search_results: Vec::new(),
            total: None,
            categories: Vec::new(),
            carousel: ImageCarousel::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input,
            category_cursor: 0,
            load_state: LoadState::Idle,
            error: None,
            latest_request: None,
            ready: false,
            theme,
            next_token: 1,
        }
    }

    /// Hands out the next request token. Tokens increase monotonically.
    pub fn issue_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }

    /// Replaces the product list with a freshly decoded page.
    ///
    /// Resets the selection and forgets all carousel positions.
    pub fn replace_products(&mut self, page: ProductPage) {
        self.products = page.products;
        self.search_results = page.matches;
        self.total = page.total;
        self.error = None;
        self.carousel.clear();
        self.selected_index = 0;
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        if self.products.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.products.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        if self.products.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.products.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected_index)
    }

    /// Steps the selected product's image carousel.
    ///
    /// Returns the new image index, or `None` when nothing is selected or the
    /// product has no images.
    pub fn advance_selected_image(&mut self, direction: CarouselDirection) -> Option<usize> {
        let product = self.products.get(self.selected_index)?;
        self.carousel
            .advance(&product.id, product.images.len(), direction)
    }

    /// Entries of the category picker: "All Categories", then every category.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    /// Picker index of the active category (0 when none or unknown).
    #[must_use]
    pub fn active_category_index(&self) -> usize {
        self.filter
            .category
            .as_ref()
            .and_then(|active| self.categories.iter().position(|c| c == active))
            .map_or(0, |i| i + 1)
    }

    /// Category chosen by picker entry `index`; `None` means all categories.
    #[must_use]
    pub fn category_at(&self, index: usize) -> Option<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .cloned()
    }

    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.filter.page() > 1
    }

    /// Whether a next page can exist.
    ///
    /// With a known total this is exact. Without one, a short page means the
    /// listing ended.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.filter.next_page().is_none() {
            return false;
        }
        let page = self.filter.page() as usize;
        self.total.map_or_else(
            || self.products.len() >= PAGE_SIZE,
            |total| page.saturating_mul(PAGE_SIZE) < total,
        )
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = self.compute_body(rows, cols);
        let pagination = match &body {
            BodyView::Products { .. }
            | BodyView::Status(StatusInfo {
                kind: StatusKind::Empty,
                ..
            }) => Some(self.compute_pagination()),
            _ => None,
        };

        UIViewModel {
            header: self.compute_header(),
            filters: self.compute_filters(),
            search_bar: self.compute_search_bar(),
            body,
            pagination,
            footer: self.compute_footer(),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> BodyView {
        if self.input_mode == InputMode::CategoryPicker {
            return BodyView::Picker(PickerInfo {
                options: self.category_options(),
                cursor: self.category_cursor,
                active: self.active_category_index(),
            });
        }

        if self.load_state.is_loading() {
            return BodyView::Status(StatusInfo {
                kind: StatusKind::Loading,
                message: "Loading...".to_string(),
                subtitle: String::new(),
            });
        }

        if let Some(error) = &self.error {
            return BodyView::Status(StatusInfo {
                kind: StatusKind::Error,
                message: format!("Error: {error}"),
                subtitle: match error {
                    FetchError::PermissionDenied => "[ q: Close ]".to_string(),
                    _ => "[ b: Go Back ]".to_string(),
                },
            });
        }

        if self.products.is_empty() {
            let message = self.filter.search_term.as_ref().map_or_else(
                || "No items found".to_string(),
                |term| format!("No items found for: {term}"),
            );
            return BodyView::Status(StatusInfo {
                kind: StatusKind::Empty,
                message,
                subtitle: "r: reset filters".to_string(),
            });
        }

        let visible_cards = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);

        let mut visible_start = self.selected_index.saturating_sub(visible_cards / 2);
        let visible_end = (visible_start + visible_cards).min(self.products.len());
        if visible_end - visible_start < visible_cards && self.products.len() >= visible_cards {
            visible_start = visible_end.saturating_sub(visible_cards);
        }

        let cards = self.products[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| {
                self.compute_card(product, visible_start + relative_idx, cols)
            })
            .collect();

        BodyView::Products {
            cards,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_card(
        &self,
        product: &Product,
        absolute_idx: usize,
        cols: usize,
    ) -> ProductCard {
        const PRICE_COLUMN_WIDTH: usize = 12;

        let max_title = cols.saturating_sub(PRICE_COLUMN_WIDTH + 4).max(8);
        let title = fit(&product.title, max_title);

        let highlight_ranges = self
            .filter
            .search_term
            .as_deref()
            .map_or_else(Vec::new, |term| match_ranges(&title, term));

        let image = (!product.images.is_empty()).then(|| {
            let index = self.carousel.current(&product.id, product.images.len());
            ImageInfo {
                url: product.images[index].clone(),
                position: index + 1,
                count: product.images.len(),
            }
        });

        ProductCard {
            title,
            highlight_ranges,
            price: product.display_price(),
            rating: format!("Rating: {}", product.rating),
            category: product.category.clone(),
            tags: product.tags.join(", "),
            image,
            is_selected: absolute_idx == self.selected_index,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.total.unwrap_or(self.products.len());
        HeaderInfo {
            title: format!(" Product Catalog ({count}) "),
            location: format!("?{}", self.history.current()),
        }
    }

    fn compute_filters(&self) -> FiltersInfo {
        FiltersInfo {
            category: self
                .filter
                .category
                .clone()
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            sort: SortKey::label(self.filter.sort).to_string(),
            search: self.filter.search_term.clone(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.input_mode == InputMode::Search).then(|| SearchBarInfo {
            query: self.search_input.clone(),
        })
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let summary = self.total.filter(|total| *total > 0).map(|total| {
            let offset = self.filter.offset();
            let start = offset.saturating_add(1).min(total);
            let end = offset.saturating_add(self.products.len()).min(total);
            format!("{start}-{end} of {total}")
        });

        PaginationInfo {
            page: self.filter.page(),
            has_prev: self.has_prev_page(),
            has_next: self.has_next_page(),
            summary,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to search  Enter: submit  ESC: cancel",
            InputMode::CategoryPicker => "j/k: navigate  Enter: select  ESC: cancel",
            InputMode::Normal if self.error.is_some() => "b: go back  r: reset  q: quit",
            InputMode::Normal => {
                "j/k: select  h/l: image  n/p: page  /: search  c: category  s: sort  r: reset  b/f: back/fwd  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for product cards after the header, filter bar, borders,
    /// pagination and footer (plus the search box while typing).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search => total_rows.saturating_sub(11),
            InputMode::Normal | InputMode::CategoryPicker => total_rows.saturating_sub(8),
        }
    }
}
