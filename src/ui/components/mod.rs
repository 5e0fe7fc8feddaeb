//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and current location
//! - [`filters`]: Active category, sort and search summary
//! - [`search`]: Search input box
//! - [`grid`]: Product cards
//! - [`status`]: Loading, error and empty-result messages
//! - [`picker`]: Category picker
//! - [`pagination`]: Previous/next page control
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Location]
//! [Filter bar]
//! [Search Bar - 3 lines, while typing]
//! [Border]
//! [Cards | Status | Picker]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod filters;
mod footer;
mod grid;
mod header;
mod pagination;
mod picker;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use filters::render_filters;
use footer::render_footer;
use grid::render_cards;
use header::render_header;
use pagination::render_pagination;
use picker::render_picker;
use search::render_search_bar;
use status::render_status;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane from a view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_filters(current_row, &vm.filters, theme, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    match &vm.body {
        BodyView::Products { cards, .. } => {
            render_cards(current_row, cards, theme, cols);
        }
        BodyView::Status(status) => {
            let middle = current_row + pagination_row.saturating_sub(current_row) / 2;
            render_status(middle.saturating_sub(1).max(current_row), status, theme, cols);
        }
        BodyView::Picker(picker) => {
            let max_rows = border_row.saturating_sub(current_row);
            render_picker(current_row, picker, theme, cols, max_rows);
        }
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
