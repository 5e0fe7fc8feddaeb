//! Category picker renderer.

use crate::ui::helpers::{char_len, fit, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerInfo;

/// Renders at most `max_rows` picker entries starting at `row`, scrolled so
/// the cursor stays visible. The active category is marked with `●`.
pub fn render_picker(row: usize, picker: &PickerInfo, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let max_rows = max_rows.max(1);
    let start = picker.cursor.saturating_sub(max_rows.saturating_sub(1));
    let end = (start + max_rows).min(picker.options.len());

    let mut current_row = row;
    for (index, option) in picker.options.iter().enumerate().take(end).skip(start) {
        let is_cursor = index == picker.cursor;
        let marker = if index == picker.active { "● " } else { "  " };

        position_cursor(current_row, 1);
        if is_cursor {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        let label = fit(option, cols.saturating_sub(4));
        print!("  {marker}{label}");
        pad(cols.saturating_sub(4 + char_len(&label)));
        print!("{}", Theme::reset());

        current_row += 1;
    }
    current_row
}
