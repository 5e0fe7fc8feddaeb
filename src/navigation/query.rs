//! Location query string builder and parser.
//!
//! The location surface uses five keys, always emitted in this order:
//! `category`, `search`, `sortBy`, `order`, `page`. Values are
//! `application/x-www-form-urlencoded`, so a space becomes `+`.

use crate::domain::{FilterState, SortDirection, SortField, SortKey};

const CATEGORY: &str = "category";
const SEARCH: &str = "search";
const SORT_BY: &str = "sortBy";
const ORDER: &str = "order";
const PAGE: &str = "page";

/// Builds the canonical query string (without a leading `?`) for `state`.
///
/// Absent fields are omitted; `page` is always present.
///
/// # Examples
///
/// ```
/// use zcatalog::domain::FilterState;
/// use zcatalog::navigation::build_query;
///
/// let state = FilterState::new(Some("snacks".into()), Some("hot chips".into()), None, 2);
/// assert_eq!(build_query(&state), "category=snacks&search=hot+chips&page=2");
/// ```
#[must_use]
pub fn build_query(state: &FilterState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(category) = state.category.as_deref() {
        query.append_pair(CATEGORY, category);
    }
    if let Some(term) = state.search_term.as_deref() {
        query.append_pair(SEARCH, term);
    }
    if let Some(sort) = state.sort {
        query.append_pair(SORT_BY, sort.field.as_param());
        query.append_pair(ORDER, sort.direction.as_param());
    }
    query.append_pair(PAGE, &state.page().to_string());

    query.finish()
}

/// Parses a location query string into a [`FilterState`].
///
/// Never fails: unknown keys and unknown `sortBy` values are ignored, a
/// missing or unrecognized `order` means ascending, and a page that is not a
/// positive integer becomes 1. A leading `?` is accepted.
#[must_use]
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut category = None;
    let mut search = None;
    let mut sort_field = None;
    let mut direction = None;
    let mut page = 1;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            CATEGORY => category = Some(value.into_owned()),
            SEARCH => search = Some(value.into_owned()),
            SORT_BY => sort_field = SortField::from_param(&value),
            ORDER => direction = SortDirection::from_param(&value),
            PAGE => page = value.trim().parse::<u32>().unwrap_or(1),
            _ => {}
        }
    }

    let sort = sort_field
        .map(|field| SortKey::new(field, direction.unwrap_or(SortDirection::Asc)));

    FilterState::new(category, search, sort, page)
}
