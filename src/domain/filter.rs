//! Filter state and its transition function.
//!
//! [`FilterState`] is the single value holding everything that selects which
//! products are shown: category, submitted search term, sort key and page.
//! Every change goes through [`FilterState::apply`], which also owns the rule
//! that any change other than a page or location change starts over at page 1.

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 20;

/// Product attribute the listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Rating,
}

impl SortField {
    /// Value used for the `sortBy` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Value used for the `order` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A sort field together with its direction.
///
/// A direction never exists without a field, so "no sorting" is simply
/// `Option::<SortKey>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Steps through the sort menu: none, price ascending, price descending,
    /// rating ascending, rating descending, then back to none.
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        use SortDirection::{Asc, Desc};
        use SortField::{Price, Rating};

        match current {
            None => Some(Self::new(Price, Asc)),
            Some(Self { field: Price, direction: Asc }) => Some(Self::new(Price, Desc)),
            Some(Self { field: Price, direction: Desc }) => Some(Self::new(Rating, Asc)),
            Some(Self { field: Rating, direction: Asc }) => Some(Self::new(Rating, Desc)),
            Some(Self { field: Rating, direction: Desc }) => None,
        }
    }

    /// Menu label for a sort selection.
    #[must_use]
    pub const fn label(key: Option<Self>) -> &'static str {
        use SortDirection::{Asc, Desc};
        use SortField::{Price, Rating};

        match key {
            None => "Sort By",
            Some(Self { field: Price, direction: Asc }) => "Price: Low to High",
            Some(Self { field: Price, direction: Desc }) => "Price: High to Low",
            Some(Self { field: Rating, direction: Asc }) => "Rating: Low to High",
            Some(Self { field: Rating, direction: Desc }) => "Rating: High to Low",
        }
    }
}

/// The combined category/search/sort/page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<String>,
    pub search_term: Option<String>,
    pub sort: Option<SortKey>,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            search_term: None,
            sort: None,
            page: 1,
        }
    }
}

/// One requested change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// Category selected (`None` is "All Categories").
    Category(Option<String>),
    /// Sort selection changed.
    Sort(Option<SortKey>),
    /// Search submitted; an empty term clears the search.
    Search(String),
    /// Page changed.
    Page(u32),
    /// Location changed underneath us (back/forward); replaces everything.
    Location(FilterState),
    /// Clear every filter.
    Reset,
}

impl FilterChange {
    /// Whether this change starts the listing over at page 1.
    #[must_use]
    pub const fn resets_page(&self) -> bool {
        !matches!(self, Self::Page(_) | Self::Location(_))
    }
}

impl FilterState {
    /// Builds a state, normalizing empty strings to `None` and page 0 to 1.
    #[must_use]
    pub fn new(
        category: Option<String>,
        search_term: Option<String>,
        sort: Option<SortKey>,
        page: u32,
    ) -> Self {
        Self {
            category: non_empty(category),
            search_term: non_empty(search_term),
            sort,
            page: page.max(1),
        }
    }

    /// Current page, always at least 1.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Zero-based index of the first product on the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(PAGE_SIZE)
    }

    /// The page after this one, or `None` past `u32::MAX`.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.page.checked_add(1)
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.search_term.is_some()
    }

    /// Applies a change and returns whether anything actually moved.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let before = self.clone();
        let resets_page = change.resets_page();

        match change {
            FilterChange::Category(category) => self.category = non_empty(category),
            FilterChange::Sort(sort) => self.sort = sort,
            FilterChange::Search(term) => self.search_term = non_empty(Some(term)),
            FilterChange::Page(page) => self.set_page(page),
            FilterChange::Location(state) => *self = state,
            FilterChange::Reset => *self = Self::default(),
        }

        if resets_page {
            self.page = 1;
        }

        *self != before
    }
}

/// Drops blank values; anything else is kept exactly as entered.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
