//! Product card list renderer.
//!
//! Each card takes three rows:
//!
//! ```text
//! ▶ Cheese Puffs                                   $4.50
//!     Rating: 4.5 · snacks · salty, crunchy
//!     ‹ 2/3 › https://cdn.example.com/puffs-2.png
//! ```

use crate::ui::helpers::{self, char_len, fit, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProductCard;

const INDENT: usize = 4;

/// Renders every card starting at `row`. Returns the next free row.
pub fn render_cards(row: usize, cards: &[ProductCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

fn render_card(row: usize, card: &ProductCard, theme: &Theme, cols: usize) -> usize {
    render_title_line(row, card, theme, cols);
    render_details_line(row + 1, card, theme, cols);
    render_image_line(row + 2, card, theme, cols);
    row + 3
}

/// Title on the left, price right-aligned; the whole line carries the
/// selection colors when selected.
fn render_title_line(row: usize, card: &ProductCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::bold());
        print!("▶ ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  ");
    }

    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);

    let used = 2 + char_len(&card.title);
    let price_len = char_len(&card.price);
    pad(cols.saturating_sub(used + price_len + 1));

    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{} ", card.price);
    print!("{}", Theme::reset());
}

fn render_details_line(row: usize, card: &ProductCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    pad(INDENT);

    let mut used = INDENT;
    print!("{}", Theme::fg(&theme.colors.rating_fg));
    print!("{}", card.rating);
    used += char_len(&card.rating);

    if !card.category.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" · {}", card.category);
        used += 3 + char_len(&card.category);
    }

    if !card.tags.is_empty() {
        let tags = fit(&card.tags, cols.saturating_sub(used + 3));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" · ");
        print!("{}", Theme::fg(&theme.colors.tag_fg));
        print!("{tags}");
        used += 3 + char_len(&tags);
    }

    pad(cols.saturating_sub(used));
    print!("{}", Theme::reset());
}

fn render_image_line(row: usize, card: &ProductCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    pad(INDENT);
    print!("{}", Theme::fg(&theme.colors.text_dim));

    let text = card.image.as_ref().map_or_else(
        || "(no image)".to_string(),
        |image| format!("‹ {}/{} › {}", image.position, image.count, image.url),
    );
    let text = fit(&text, cols.saturating_sub(INDENT));
    print!("{text}");
    pad(cols.saturating_sub(INDENT + char_len(&text)));
    print!("{}", Theme::reset());
}
