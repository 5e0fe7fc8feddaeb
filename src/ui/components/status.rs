//! Loading, error and empty-result message renderer.

use crate::ui::helpers::{char_len, fit, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusInfo, StatusKind};

/// Renders a centered two-line message starting at `row`.
///
/// Errors use the error color and show the go-back control as the subtitle.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::Loading | StatusKind::Empty => &theme.colors.status_fg,
    };

    let message = fit(&status.message, cols);
    let msg_len = char_len(&message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    pad(msg_padding);
    print!("{message}");
    pad(cols.saturating_sub(msg_padding + msg_len));
    print!("{}", Theme::reset());

    if status.subtitle.is_empty() {
        return row + 1;
    }

    let subtitle = fit(&status.subtitle, cols);
    let sub_len = char_len(&subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(row + 1, 1);
    if status.kind == StatusKind::Error {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    pad(sub_padding);
    print!("{subtitle}");
    pad(cols.saturating_sub(sub_padding + sub_len));
    print!("{}", Theme::reset());

    row + 2
}
