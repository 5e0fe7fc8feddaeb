//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the application state changes. Every
//! change to the filter state, whether it comes from a key press, the
//! category picker or back/forward navigation, funnels into a single
//! transition: apply the change, derive the location, record it, then issue
//! a fresh products request under a new token.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `PrevImage`, `NextImage`
//! - **Input**: `Char`, `Backspace`, `Confirm`, `Escape`
//! - **Mode Switching**: `SearchMode`, `OpenCategoryPicker`
//! - **Filter changes**: `CategoryChanged`, `SortChanged`, `SearchSubmitted`,
//!   `PageChanged`, `UrlChanged`, `ResetFilters`, plus the key-level shortcuts
//!   `NextPage`, `PrevPage`, `CycleSort`, `HistoryBack`, `HistoryForward`
//! - **Host**: `Ready`, `PermissionDenied`, `ResponseReceived`
//!
//! # Example
//!
//! ```
//! use zcatalog::app::{handle_event, Action, AppState, Event};
//! use zcatalog::gateway::CatalogApi;
//! use zcatalog::ui::Theme;
//!
//! let mut state = AppState::new(CatalogApi::default(), "", Theme::default());
//! handle_event(&mut state, &Event::Ready)?;
//! let (_render, actions) = handle_event(&mut state, &Event::CategoryChanged(Some("snacks".into())))?;
//! assert!(matches!(actions[0], Action::UpdateLocation { .. }));
//! assert!(matches!(actions[1], Action::Fetch { .. }));
//! # Ok::<(), zcatalog::CatalogError>(())
//! ```

use super::modes::{InputMode, LoadState};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CarouselDirection, FetchError, FilterChange, SortKey};
use crate::gateway::{ApiResponse, Resource, ResponseTag};
use crate::navigation::{build_query, parse_query};
use chrono::Utc;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (products or picker entries, wrapping).
    KeyDown,
    /// Moves the cursor up (products or picker entries, wrapping).
    KeyUp,
    /// Shows the selected product's previous image.
    PrevImage,
    /// Shows the selected product's next image.
    NextImage,
    /// Goes to the next page if one exists.
    NextPage,
    /// Goes to the previous page if not on page 1.
    PrevPage,
    /// Advances to the next sort option.
    CycleSort,
    /// Opens the category picker.
    OpenCategoryPicker,
    /// Starts editing the search input.
    SearchMode,
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character from the search input.
    Backspace,
    /// Submits the search input or the highlighted category.
    Confirm,
    /// Leaves search or picker mode without applying anything.
    Escape,
    /// Goes back one location. On an error with no earlier location the
    /// current location is fetched again.
    HistoryBack,
    /// Goes forward one location.
    HistoryForward,
    /// Clears every filter.
    ResetFilters,
    /// Hides the plugin pane.
    CloseFocus,

    /// Network access was granted; issue the startup requests.
    Ready,

    /// Network access was refused; nothing can be fetched.
    PermissionDenied,

    /// A host request completed.
    ResponseReceived {
        /// Resource and token the request was tagged with.
        tag: ResponseTag,
        /// Status and body.
        response: ApiResponse,
    },

    /// Category selected; `None` selects all categories.
    CategoryChanged(Option<String>),
    /// Sort option selected; `None` removes sorting.
    SortChanged(Option<SortKey>),
    /// Search term submitted; an empty term clears the search.
    SearchSubmitted(String),
    /// Page selected.
    PageChanged(u32),
    /// Location replaced from outside (back/forward).
    UrlChanged(String),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render together with the actions, in the
/// order they must run.
///
/// # Errors
///
/// No handler fails today; callers log an `Err` and skip rendering.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode == InputMode::CategoryPicker {
                let count = state.category_options().len();
                state.category_cursor = (state.category_cursor + 1) % count;
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::CategoryPicker {
                let count = state.category_options().len();
                state.category_cursor = (state.category_cursor + count - 1) % count;
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::PrevImage => Ok((state.advance_selected_image(CarouselDirection::Prev).is_some(), vec![])),
        Event::NextImage => Ok((state.advance_selected_image(CarouselDirection::Next).is_some(), vec![])),
        Event::NextPage => {
            if !state.has_next_page() {
                tracing::debug!(page = state.filter.page(), "already on the last page");
                return Ok((false, vec![]));
            }
            let Some(next) = state.filter.next_page() else {
                return Ok((false, vec![]));
            };
            Ok((true, transition(state, FilterChange::Page(next), true)))
        }
        Event::PrevPage => {
            if !state.has_prev_page() {
                return Ok((false, vec![]));
            }
            let prev = state.filter.page() - 1;
            Ok((true, transition(state, FilterChange::Page(prev), true)))
        }
        Event::CycleSort => {
            let sort = SortKey::cycle(state.filter.sort);
            tracing::debug!(sort = SortKey::label(sort), "sort cycled");
            Ok((true, transition(state, FilterChange::Sort(sort), true)))
        }
        Event::OpenCategoryPicker => {
            state.category_cursor = state.active_category_index();
            state.input_mode = InputMode::CategoryPicker;
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(input = %state.search_input, char = %c, "search input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_input.pop();
            Ok((true, vec![]))
        }
        Event::Confirm => match state.input_mode {
            InputMode::Search => {
                state.input_mode = InputMode::Normal;
                let term = state.search_input.clone();
                tracing::debug!(term = %term, "search submitted");
                Ok((true, transition(state, FilterChange::Search(term), true)))
            }
            InputMode::CategoryPicker => {
                state.input_mode = InputMode::Normal;
                let category = state.category_at(state.category_cursor);
                tracing::debug!(category = ?category, "category picked");
                Ok((true, transition(state, FilterChange::Category(category), true)))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Search => {
                state.search_input = state.filter.search_term.clone().unwrap_or_default();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::CategoryPicker => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::HistoryBack => {
            if let Some(query) = state.history.back().map(str::to_string) {
                tracing::debug!(query = %query, "navigating back");
                return Ok((true, location_changed(state, &query)));
            }
            if state.ready && state.error.is_some() {
                tracing::debug!("no earlier location, retrying current location");
                let query = state.history.current().to_string();
                return Ok((true, vec![Action::UpdateLocation { query }, fetch_products(state)]));
            }
            Ok((false, vec![]))
        }
        Event::HistoryForward => {
            let Some(query) = state.history.forward().map(str::to_string) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(query = %query, "navigating forward");
            Ok((true, location_changed(state, &query)))
        }
        Event::ResetFilters => {
            state.input_mode = InputMode::Normal;
            Ok((true, transition(state, FilterChange::Reset, true)))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Ready => {
            if state.ready {
                tracing::debug!("startup requests already issued");
                return Ok((false, vec![]));
            }
            state.ready = true;

            let categories = fetch_categories(state);
            let query = build_query(&state.filter);
            let products = fetch_products(state);
            Ok((true, vec![categories, Action::UpdateLocation { query }, products]))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access denied");
            state.ready = false;
            state.latest_request = None;
            state.load_state = LoadState::Idle;
            state.error = Some(FetchError::PermissionDenied);
            Ok((true, vec![]))
        }
        Event::ResponseReceived { tag, response } => Ok(handle_response(state, *tag, response)),
        Event::CategoryChanged(category) => {
            Ok((true, transition(state, FilterChange::Category(category.clone()), true)))
        }
        Event::SortChanged(sort) => Ok((true, transition(state, FilterChange::Sort(*sort), true))),
        Event::SearchSubmitted(term) => {
            Ok((true, transition(state, FilterChange::Search(term.clone()), true)))
        }
        Event::PageChanged(page) => Ok((true, transition(state, FilterChange::Page(*page), true))),
        Event::UrlChanged(query) => Ok((true, location_changed(state, query))),
    }
}

/// The single filter transition.
///
/// Applies `change`, derives the location, records it in history when
/// `record` is set, and issues a products request for the new state. Before
/// web access is granted only the location moves; `Ready` fetches it later.
fn transition(state: &mut AppState, change: FilterChange, record: bool) -> Vec<Action> {
    let _span = tracing::debug_span!("filter_transition", change = ?change, record).entered();

    let changed = state.filter.apply(change);
    let query = build_query(&state.filter);
    if record {
        state.history.push(query.clone());
    }
    state.search_input = state.filter.search_term.clone().unwrap_or_default();

    tracing::debug!(query = %query, changed, page = state.filter.page(), "filter state updated");

    let mut actions = vec![Action::UpdateLocation { query }];
    if state.ready {
        actions.push(fetch_products(state));
    } else {
        tracing::debug!("web access not granted, fetch deferred");
    }
    actions
}

/// Adopts a location that is already in history.
fn location_changed(state: &mut AppState, query: &str) -> Vec<Action> {
    let filter = parse_query(query);
    transition(state, FilterChange::Location(filter), false)
}

fn fetch_products(state: &mut AppState) -> Action {
    let token = state.issue_token();
    state.latest_request = Some(token);
    state.load_state = LoadState::Loading {
        token,
        started_at: Utc::now(),
    };
    state.error = None;

    let request = state.api.products_request(&state.filter);
    tracing::debug!(token, url = %request.url, "requesting products");
    Action::Fetch { token, request }
}

fn fetch_categories(state: &mut AppState) -> Action {
    let token = state.issue_token();
    let request = state.api.categories_request();
    tracing::debug!(token, url = %request.url, "requesting categories");
    Action::Fetch { token, request }
}

fn handle_response(state: &mut AppState, tag: ResponseTag, response: &ApiResponse) -> (bool, Vec<Action>) {
    match tag.resource {
        Resource::Categories => match state.api.decode_categories(response) {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "categories loaded");
                state.categories = categories;
                (true, vec![])
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load categories");
                (false, vec![])
            }
        },
        Resource::Products => {
            if state.latest_request != Some(tag.token) {
                tracing::debug!(
                    token = tag.token,
                    latest = ?state.latest_request,
                    "dropping stale products response"
                );
                return (false, vec![]);
            }

            let latency_ms = match state.load_state {
                LoadState::Loading { started_at, .. } => {
                    Some((Utc::now() - started_at).num_milliseconds())
                }
                LoadState::Idle => None,
            };
            state.load_state = LoadState::Idle;

            match state.api.decode_products(&state.filter, response) {
                Ok(page) => {
                    tracing::info!(
                        token = tag.token,
                        status = response.status,
                        products = page.products.len(),
                        total = ?page.total,
                        latency_ms = ?latency_ms,
                        "products loaded"
                    );
                    state.replace_products(page);
                }
                Err(e) => {
                    tracing::warn!(
                        token = tag.token,
                        status = response.status,
                        latency_ms = ?latency_ms,
                        error = %e,
                        "failed to load products"
                    );
                    state.error = Some(e);
                }
            }
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField, PAGE_SIZE};
    use crate::gateway::{ApiRequest, CatalogApi};
    use crate::ui::viewmodel::{BodyView, StatusKind};
    use crate::ui::Theme;

    fn new_state(query: &str) -> AppState {
        AppState::new(CatalogApi::default(), query, Theme::default())
    }

    /// A state that has been granted web access, with the startup
    /// responses still outstanding.
    fn ready_state(query: &str) -> AppState {
        let mut state = new_state(query);
        send(&mut state, Event::Ready);
        state
    }

    fn send(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn fetch_in(actions: &[Action]) -> (u64, ApiRequest) {
        actions
            .iter()
            .find_map(|action| match action {
                Action::Fetch { token, request } if request.resource == Resource::Products => {
                    Some((*token, request.clone()))
                }
                _ => None,
            })
            .expect("products fetch")
    }

    fn location_in(actions: &[Action]) -> String {
        actions
            .iter()
            .find_map(|action| match action {
                Action::UpdateLocation { query } => Some(query.clone()),
                _ => None,
            })
            .expect("location update")
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    fn products_body(count: usize, offset: usize) -> Vec<u8> {
        let items: Vec<String> = (0..count)
            .map(|i| {
                let id = offset + i;
                format!(
                    r#"{{"id": {id}, "title": "Chips {id}", "category": "snacks", "price": {}.25, "rating": 3.5, "images": ["a.png", "b.png", "c.png"]}}"#,
                    (id * 13) % 40
                )
            })
            .collect();
        format!("[{}]", items.join(",")).into_bytes()
    }

    fn respond(state: &mut AppState, token: u64, status: u16, body: Vec<u8>) -> bool {
        handle_event(
            state,
            &Event::ResponseReceived {
                tag: ResponseTag {
                    resource: Resource::Products,
                    token,
                },
                response: ApiResponse::new(status, body),
            },
        )
        .unwrap()
        .0
    }

    #[test]
    fn category_page_two_scenario() {
        let mut state = ready_state("");
        send(&mut state, Event::CategoryChanged(Some("snacks".into())));
        let actions = send(&mut state, Event::PageChanged(2));

        assert_eq!(location_in(&actions), "category=snacks&page=2");
        let (_, request) = fetch_in(&actions);
        let pairs = query_pairs(&request.url);
        assert!(pairs.contains(&("skip".into(), "20".into())));
        assert!(pairs.contains(&("limit".into(), "20".into())));
        assert!(pairs.contains(&("category".into(), "snacks".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn search_price_desc_scenario() {
        let mut state = ready_state("");
        send(&mut state, Event::SearchSubmitted("chips".into()));
        let actions = send(
            &mut state,
            Event::SortChanged(Some(SortKey::new(SortField::Price, SortDirection::Desc))),
        );

        let (token, request) = fetch_in(&actions);
        let pairs = query_pairs(&request.url);
        assert!(pairs.contains(&("search".into(), "chips".into())));
        assert!(pairs.contains(&("limit".into(), "3000".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "skip"));

        assert!(respond(&mut state, token, 200, products_body(45, 0)));
        assert_eq!(state.products.len(), PAGE_SIZE);
        assert_eq!(state.search_results.len(), 45);
        assert_eq!(state.total, Some(45));
        assert!(state.products.windows(2).all(|w| w[0].price >= w[1].price));
        assert!(!state.load_state.is_loading());
    }

    #[test]
    fn server_error_keeps_products_and_offers_go_back() {
        let mut state = new_state("");
        let (token, _) = fetch_in(&send(&mut state, Event::Ready));
        respond(&mut state, token, 200, products_body(PAGE_SIZE, 0));
        let before = state.products.clone();

        let (token, _) = fetch_in(&send(&mut state, Event::NextPage));
        respond(&mut state, token, 500, b"Internal Server Error".to_vec());

        assert_eq!(
            state.error,
            Some(FetchError::Status {
                resource: Resource::Products,
                status: 500
            })
        );
        assert_eq!(state.products, before);

        let vm = state.compute_viewmodel(24, 100);
        let BodyView::Status(status) = vm.body else {
            panic!("expected error view");
        };
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.subtitle.contains("Go Back"));
        assert!(vm.pagination.is_none());

        let actions = send(&mut state, Event::HistoryBack);
        assert_eq!(location_in(&actions), "page=1");
        assert_eq!(state.filter.page(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn go_back_without_history_refetches_current_location() {
        let mut state = new_state("category=snacks");
        let (token, _) = fetch_in(&send(&mut state, Event::Ready));
        respond(&mut state, token, 503, Vec::new());
        assert!(state.error.is_some());

        let actions = send(&mut state, Event::HistoryBack);
        let (retry, request) = fetch_in(&actions);
        assert!(retry > token);
        assert!(request.url.contains("category=snacks"));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = ready_state("");
        let (first, _) = fetch_in(&send(&mut state, Event::CategoryChanged(Some("snacks".into()))));
        let (second, _) = fetch_in(&send(&mut state, Event::CategoryChanged(Some("drinks".into()))));
        assert!(second > first);

        assert!(!respond(&mut state, first, 200, products_body(5, 0)));
        assert!(state.products.is_empty());
        assert!(state.load_state.is_loading());

        assert!(respond(&mut state, second, 200, products_body(3, 100)));
        assert_eq!(state.products.len(), 3);
        assert_eq!(state.products[0].id.as_str(), "100");
        assert!(!state.load_state.is_loading());
    }

    #[test]
    fn filter_changes_reset_page_and_record_history() {
        let mut state = new_state("page=3");
        let actions = send(
            &mut state,
            Event::SortChanged(Some(SortKey::new(SortField::Rating, SortDirection::Asc))),
        );
        assert_eq!(state.filter.page(), 1);
        assert_eq!(location_in(&actions), "sortBy=rating&order=asc&page=1");
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn url_changes_do_not_record_history() {
        let mut state = new_state("");
        let actions = send(&mut state, Event::UrlChanged("?category=snacks&page=4".into()));

        assert_eq!(state.filter.page(), 4);
        assert_eq!(state.filter.category.as_deref(), Some("snacks"));
        assert_eq!(location_in(&actions), "category=snacks&page=4");
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn back_and_forward_restore_filters() {
        let mut state = new_state("");
        send(&mut state, Event::CategoryChanged(Some("snacks".into())));
        send(&mut state, Event::PageChanged(2));

        send(&mut state, Event::HistoryBack);
        assert_eq!(state.filter.page(), 1);
        assert_eq!(state.filter.category.as_deref(), Some("snacks"));

        send(&mut state, Event::HistoryForward);
        assert_eq!(state.filter.page(), 2);
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn ready_fetches_categories_once() {
        let mut state = new_state("");
        let actions = send(&mut state, Event::Ready);
        assert!(actions.iter().any(|a| matches!(
            a,
            Action::Fetch { request, .. } if request.resource == Resource::Categories
        )));
        fetch_in(&actions);

        assert!(send(&mut state, Event::Ready).is_empty());
    }

    #[test]
    fn categories_failure_is_ignored() {
        let mut state = new_state("");
        let (render, actions) = handle_event(
            &mut state,
            &Event::ResponseReceived {
                tag: ResponseTag {
                    resource: Resource::Categories,
                    token: 1,
                },
                response: ApiResponse::new(404, Vec::new()),
            },
        )
        .unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.error.is_none());
        assert!(state.categories.is_empty());
    }

    #[test]
    fn search_input_is_buffered_until_submitted() {
        let mut state = new_state("");
        send(&mut state, Event::SearchMode);
        for c in "dip".chars() {
            assert!(send(&mut state, Event::Char(c)).is_empty());
        }
        assert_eq!(state.search_input, "dip");
        assert!(state.filter.search_term.is_none());

        send(&mut state, Event::Escape);
        assert_eq!(state.search_input, "");
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('x'));
        let actions = send(&mut state, Event::Confirm);
        assert_eq!(location_in(&actions), "search=x&page=1");

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Backspace);
        send(&mut state, Event::Confirm);
        assert!(state.filter.search_term.is_none());
    }

    #[test]
    fn category_picker_selects_category() {
        let mut state = ready_state("");
        state.categories = vec!["drinks".into(), "snacks".into()];

        send(&mut state, Event::OpenCategoryPicker);
        assert_eq!(state.category_cursor, 0);
        send(&mut state, Event::KeyUp);
        assert_eq!(state.category_cursor, 2);

        let actions = send(&mut state, Event::Confirm);
        assert_eq!(state.filter.category.as_deref(), Some("snacks"));
        assert_eq!(state.input_mode, InputMode::Normal);
        fetch_in(&actions);

        send(&mut state, Event::OpenCategoryPicker);
        assert_eq!(state.category_cursor, 2);
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::Confirm);
        assert!(state.filter.category.is_none());
    }

    #[test]
    fn reset_clears_filters() {
        let mut state = new_state("category=snacks&search=chips&sortBy=price&order=desc&page=2");
        let actions = send(&mut state, Event::ResetFilters);
        assert_eq!(location_in(&actions), "page=1");
        assert!(state.filter.category.is_none());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn pagination_respects_bounds() {
        let mut state = new_state("");
        assert!(send(&mut state, Event::PrevPage).is_empty());

        let (token, _) = fetch_in(&send(&mut state, Event::Ready));
        respond(&mut state, token, 200, products_body(7, 0));
        assert!(send(&mut state, Event::NextPage).is_empty());
        assert_eq!(state.filter.page(), 1);
    }

    #[test]
    fn image_navigation_moves_selected_carousel() {
        let mut state = new_state("");
        let (token, _) = fetch_in(&send(&mut state, Event::Ready));
        respond(&mut state, token, 200, products_body(2, 0));

        send(&mut state, Event::KeyDown);
        send(&mut state, Event::PrevImage);
        let selected = state.selected_product().unwrap().clone();
        assert_eq!(state.carousel.current(&selected.id, 3), 2);

        let first = state.products[0].id.clone();
        assert_eq!(state.carousel.current(&first, 3), 0);
    }

    #[test]
    fn cycle_sort_walks_options() {
        let mut state = new_state("");
        send(&mut state, Event::CycleSort);
        assert_eq!(state.filter.sort, Some(SortKey::new(SortField::Price, SortDirection::Asc)));
        for _ in 0..4 {
            send(&mut state, Event::CycleSort);
        }
        assert_eq!(state.filter.sort, None);
    }

    #[test]
    fn filter_changes_before_ready_defer_the_fetch() {
        let mut state = new_state("");
        let actions = send(&mut state, Event::CategoryChanged(Some("snacks".into())));
        assert_eq!(actions, vec![Action::UpdateLocation { query: "category=snacks&page=1".into() }]);
        assert!(send(&mut state, Event::CycleSort)
            .iter()
            .all(|a| !matches!(a, Action::Fetch { .. })));
        assert!(!state.load_state.is_loading());

        let (_, request) = fetch_in(&send(&mut state, Event::Ready));
        let pairs = query_pairs(&request.url);
        assert!(pairs.contains(&("category".into(), "snacks".into())));
        assert!(pairs.contains(&("sortBy".into(), "price".into())));
    }

    #[test]
    fn denied_access_shows_error_and_fetches_nothing() {
        let mut state = new_state("");
        assert!(handle_event(&mut state, &Event::PermissionDenied).unwrap().0);
        assert_eq!(state.error, Some(FetchError::PermissionDenied));

        let vm = state.compute_viewmodel(24, 100);
        let BodyView::Status(status) = vm.body else {
            panic!("expected error view");
        };
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.subtitle.contains("Close"));

        assert!(send(&mut state, Event::HistoryBack).is_empty());
        let actions = send(&mut state, Event::PageChanged(2));
        assert!(actions.iter().all(|a| !matches!(a, Action::Fetch { .. })));
        assert_eq!(state.error, Some(FetchError::PermissionDenied));
    }

    #[test]
    fn next_page_stops_at_the_largest_page_number() {
        let mut state = new_state("page=4294967295");
        let (token, request) = fetch_in(&send(&mut state, Event::Ready));
        assert!(query_pairs(&request.url).iter().any(|(k, _)| k == "skip"));
        respond(&mut state, token, 200, products_body(PAGE_SIZE, 0));

        assert!(!state.has_next_page());
        assert!(send(&mut state, Event::NextPage).is_empty());
        assert_eq!(state.filter.page(), u32::MAX);
        assert!(state.compute_viewmodel(24, 100).pagination.is_some());
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = new_state("");
        assert_eq!(send(&mut state, Event::CloseFocus), vec![Action::CloseFocus]);
    }
}
