//! Per-product image carousel positions.
//!
//! Each product card cycles through its images independently. Positions are
//! created lazily the first time a card is navigated and live only as long as
//! the current product list.

use super::product::ProductId;
use std::collections::HashMap;

/// Direction of a carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselDirection {
    Prev,
    Next,
}

/// Mapping from product id to the index of the image currently shown.
#[derive(Debug, Clone, Default)]
pub struct ImageCarousel {
    indices: HashMap<ProductId, usize>,
}

impl ImageCarousel {
    /// Index of the image shown for `id`, given how many images it has.
    ///
    /// Products never navigated show their first image.
    #[must_use]
    pub fn current(&self, id: &ProductId, image_count: usize) -> usize {
        if image_count == 0 {
            return 0;
        }
        self.indices.get(id).copied().unwrap_or(0) % image_count
    }

    /// Moves the carousel for `id` one step and returns the new index.
    ///
    /// Returns `None` and leaves the state untouched when there are no images.
    pub fn advance(
        &mut self,
        id: &ProductId,
        image_count: usize,
        direction: CarouselDirection,
    ) -> Option<usize> {
        if image_count == 0 {
            return None;
        }

        let current = self.current(id, image_count);
        let next = match direction {
            CarouselDirection::Prev => (current + image_count - 1) % image_count,
            CarouselDirection::Next => (current + 1) % image_count,
        };

        self.indices.insert(id.clone(), next);
        Some(next)
    }

    /// Forgets every position; called when the product list is replaced.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_images_from_start() {
        let id = ProductId::new("1");

        let mut carousel = ImageCarousel::default();
        assert_eq!(carousel.advance(&id, 3, CarouselDirection::Prev), Some(2));

        let mut carousel = ImageCarousel::default();
        assert_eq!(carousel.advance(&id, 3, CarouselDirection::Next), Some(1));
    }

    #[test]
    fn wraps_at_both_ends_for_any_count() {
        let id = ProductId::new("p");
        for count in 1..=6 {
            let mut carousel = ImageCarousel::default();
            for _ in 0..count {
                carousel.advance(&id, count, CarouselDirection::Next);
            }
            assert_eq!(carousel.current(&id, count), 0, "count {count}");

            carousel.advance(&id, count, CarouselDirection::Prev);
            assert_eq!(carousel.current(&id, count), count - 1, "count {count}");
        }
    }

    #[test]
    fn no_images_is_a_no_op() {
        let id = ProductId::new("empty");
        let mut carousel = ImageCarousel::default();

        assert_eq!(carousel.advance(&id, 0, CarouselDirection::Next), None);
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(&id, 0), 0);
    }

    #[test]
    fn products_are_independent() {
        let a = ProductId::new("a");
        let b = ProductId::new("b");
        let mut carousel = ImageCarousel::default();

        carousel.advance(&a, 4, CarouselDirection::Next);
        carousel.advance(&a, 4, CarouselDirection::Next);

        assert_eq!(carousel.current(&a, 4), 2);
        assert_eq!(carousel.current(&b, 4), 0);

        carousel.clear();
        assert_eq!(carousel.current(&a, 4), 0);
    }
}
