//! Header component renderer.
//!
//! Renders the plugin title bar and, below it, the current location.

use crate::ui::helpers::{char_len, fit, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title at `row` and the location line below it.
///
/// Returns the next available row (row + 2).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit(&header.title, cols);
    let title_len = char_len(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    pad(padding);
    print!("{title}");
    pad(cols.saturating_sub(padding + title_len));
    print!("{}", Theme::reset());

    let location = fit(&header.location, cols);
    let location_len = char_len(&location);
    let padding = (cols.saturating_sub(location_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(padding);
    print!("{location}");
    pad(cols.saturating_sub(padding + location_len));
    print!("{}", Theme::reset());

    row + 2
}
