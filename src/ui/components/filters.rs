//! Filter bar component renderer.
//!
//! One line summarizing the active category, sort option and search term.

use crate::ui::helpers::{char_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FiltersInfo;

/// Renders `Category: … │ Sort: … │ Search: …` at `row`.
pub fn render_filters(row: usize, filters: &FiltersInfo, theme: &Theme, cols: usize) -> usize {
    let mut parts = vec![
        ("Category", filters.category.as_str()),
        ("Sort", filters.sort.as_str()),
    ];
    if let Some(term) = &filters.search {
        parts.push(("Search", term.as_str()));
    }

    position_cursor(row, 1);
    let mut used = 0;
    for (i, (label, value)) in parts.iter().enumerate() {
        let separator = if i == 0 { " " } else { " │ " };
        let len = char_len(separator) + char_len(label) + 2 + char_len(value);
        if used + len > cols {
            break;
        }

        print!("{}", Theme::fg(&theme.colors.border));
        print!("{separator}");
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label}: ");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        used += len;
    }
    pad(cols.saturating_sub(used));
    print!("{}", Theme::reset());

    row + 1
}
