//! Local ordering and paging of search results.
//!
//! When a search term is active the API returns every match at once, so
//! sorting and paging happen here instead of on the server.

use crate::domain::{Product, SortDirection, SortField, SortKey, PAGE_SIZE};

/// Sorts products in place by `key`.
///
/// The sort is stable, so ties keep the server's order, and `None` leaves the
/// slice untouched.
pub fn sort_products(products: &mut [Product], key: Option<SortKey>) {
    let Some(key) = key else {
        return;
    };

    products.sort_by(|a, b| {
        let ordering = match key.field {
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Rating => a.rating.total_cmp(&b.rating),
        };
        match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Returns page `page` (1-based) of `products`.
///
/// The slice is `[(page - 1) * PAGE_SIZE, min(page * PAGE_SIZE, len))`; a page
/// past the end is empty.
#[must_use]
pub fn paginate(products: &[Product], page: u32) -> &[Product] {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= products.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(products.len());
    &products[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use std::cmp::Ordering;

    fn in_order(a: &Product, b: &Product, key: SortKey) -> bool {
        let ordering = match key.field {
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Rating => a.rating.total_cmp(&b.rating),
        };
        match key.direction {
            SortDirection::Asc => ordering != Ordering::Greater,
            SortDirection::Desc => ordering != Ordering::Less,
        }
    }

    fn product(id: usize, price: f64, rating: f64) -> Product {
        Product {
            id: ProductId::new(id.to_string()),
            title: format!("Product {id}"),
            category: "snacks".to_string(),
            price,
            rating,
            tags: Vec::new(),
            images: Vec::new(),
        }
    }

    fn catalog(len: usize) -> Vec<Product> {
        (0..len)
            .map(|i| product(i, ((i * 37) % 23) as f64 + 0.5, ((i * 11) % 5) as f64))
            .collect()
    }

    #[test]
    fn sorted_output_is_monotonic() {
        for field in [SortField::Price, SortField::Rating] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let key = SortKey::new(field, direction);
                let mut products = catalog(45);
                sort_products(&mut products, Some(key));
                assert!(
                    products.windows(2).all(|w| in_order(&w[0], &w[1], key)),
                    "{key:?}"
                );
            }
        }
    }

    #[test]
    fn no_sort_key_keeps_server_order() {
        let original = catalog(30);
        let mut products = original.clone();
        sort_products(&mut products, None);
        assert_eq!(products, original);
    }

    #[test]
    fn ties_keep_server_order() {
        let mut products = vec![product(1, 5.0, 1.0), product(2, 5.0, 2.0), product(3, 1.0, 3.0)];
        sort_products(&mut products, Some(SortKey::new(SortField::Price, SortDirection::Desc)));
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn paginate_slices_pages() {
        let products = catalog(45);
        assert_eq!(paginate(&products, 1).len(), 20);
        assert_eq!(paginate(&products, 2)[0].id.as_str(), "20");
        assert_eq!(paginate(&products, 3).len(), 5);
        assert!(paginate(&products, 4).is_empty());
        assert!(paginate(&products, 400).is_empty());
        assert!(paginate(&[], 1).is_empty());
    }
}
