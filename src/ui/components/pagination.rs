//! Pagination control renderer.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `‹ Previous   Page N (a-b of t)   Next ›` centered at `row`.
///
/// Disabled directions are dimmed.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    const PREVIOUS: &str = "‹ Previous";
    const NEXT: &str = "Next ›";

    let page = pagination.summary.as_ref().map_or_else(
        || format!("Page {}", pagination.page),
        |summary| format!("Page {} ({summary})", pagination.page),
    );
    let total_len = char_len(PREVIOUS) + char_len(&page) + char_len(NEXT) + 6;
    let padding = cols.saturating_sub(total_len) / 2;

    let enabled = |on: bool| {
        if on {
            Theme::fg(&theme.colors.text_normal)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    position_cursor(row, 1);
    pad(padding);
    print!("{}{PREVIOUS}{}", enabled(pagination.has_prev), Theme::reset());
    pad(3);
    print!("{}{}{page}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    pad(3);
    print!("{}{NEXT}{}", enabled(pagination.has_next), Theme::reset());
    pad(cols.saturating_sub(padding + total_len));

    row + 1
}
