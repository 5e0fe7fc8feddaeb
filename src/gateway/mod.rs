//! Remote catalog API gateway.
//!
//! Builds the two read-only requests the plugin makes (products and
//! categories) and decodes the host's responses into typed values. The
//! gateway never performs I/O itself: requests are handed to the plugin shim
//! as [`ApiRequest`] values and responses come back as [`ApiResponse`] events.
//!
//! Requests carry a small context map (see [`ResponseTag`]) which the host
//! echoes back with the response, so a response can be routed to the right
//! decoder and matched against the request that produced it.

pub mod ordering;

use crate::domain::{CatalogError, FetchError, FilterState, Product, Result, PAGE_SIZE};
use std::collections::BTreeMap;
use std::fmt;

pub use ordering::{paginate, sort_products};

/// Base URL used when no `api_url` is configured.
pub const DEFAULT_BASE_URL: &str = "https://next-ecommerce-api.vercel.app";

/// Number of products requested at once while a search term is active.
pub const DEFAULT_SEARCH_FETCH_LIMIT: usize = 3000;

const CONTEXT_RESOURCE: &str = "resource";
const CONTEXT_TOKEN: &str = "token";

/// Endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Categories,
}

impl Resource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
        }
    }

    fn from_name(value: &str) -> Option<Self> {
        match value {
            "products" => Some(Self::Products),
            "categories" => Some(Self::Categories),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GET request ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub resource: Resource,
    pub url: String,
}

impl ApiRequest {
    /// Context map attached to the host request and echoed back with the
    /// response.
    #[must_use]
    pub fn context(&self, token: u64) -> BTreeMap<String, String> {
        ResponseTag {
            resource: self.resource,
            token,
        }
        .into_context()
    }
}

/// Identifies which request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTag {
    pub resource: Resource,
    pub token: u64,
}

impl ResponseTag {
    #[must_use]
    pub fn into_context(self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_RESOURCE.to_string(), self.resource.to_string());
        context.insert(CONTEXT_TOKEN.to_string(), self.token.to_string());
        context
    }

    /// Recovers the tag from a response context.
    ///
    /// Returns `None` for responses to requests this plugin did not tag.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let resource = Resource::from_name(context.get(CONTEXT_RESOURCE)?)?;
        let token = context.get(CONTEXT_TOKEN)?.parse().ok()?;
        Some(Self { resource, token })
    }
}

/// Status and body of a completed host request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// One decoded page of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    /// Products to display on the current page.
    pub products: Vec<Product>,
    /// Every search match in display order; empty when not searching.
    pub matches: Vec<Product>,
    /// Total number of products available, when known.
    pub total: Option<usize>,
}

/// Client for the remote catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogApi {
    base_url: String,
    search_fetch_limit: usize,
}

impl Default for CatalogApi {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_fetch_limit: DEFAULT_SEARCH_FETCH_LIMIT,
        }
    }
}

impl CatalogApi {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the URL is not http(s) or the
    /// search fetch limit is zero.
    pub fn new(base_url: &str, search_fetch_limit: usize) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::Config(format!(
                "api_url must be an http(s) URL, got '{base_url}'"
            )));
        }
        if search_fetch_limit == 0 {
            return Err(CatalogError::Config(
                "search_fetch_limit must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            search_fetch_limit,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn search_fetch_limit(&self) -> usize {
        self.search_fetch_limit
    }

    /// `GET {base}/categories`.
    #[must_use]
    pub fn categories_request(&self) -> ApiRequest {
        ApiRequest {
            resource: Resource::Categories,
            url: format!("{}/categories", self.base_url),
        }
    }

    /// Request for the products matching `filter`.
    ///
    /// Without a search term the server pages and sorts. With one, every match
    /// is requested at once and [`decode_products`](Self::decode_products)
    /// sorts and pages locally.
    #[must_use]
    pub fn products_request(&self, filter: &FilterState) -> ApiRequest {
        let mut params = form_urlencoded::Serializer::new(String::new());

        if let Some(term) = filter.search_term.as_deref() {
            params.append_pair("search", term);
            params.append_pair("limit", &self.search_fetch_limit.to_string());
        } else {
            params.append_pair("limit", &PAGE_SIZE.to_string());
            params.append_pair("skip", &filter.offset().to_string());
        }

        if let Some(category) = filter.category.as_deref() {
            params.append_pair("category", category);
        }

        if let Some(sort) = filter.sort {
            params.append_pair("sortBy", sort.field.as_param());
            params.append_pair("order", sort.direction.as_param());
        }

        ApiRequest {
            resource: Resource::Products,
            url: format!("{}/products?{}", self.base_url, params.finish()),
        }
    }

    /// Decodes a categories response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on a non-2xx status or a body that is not a JSON
    /// array of strings.
    pub fn decode_categories(
        &self,
        response: &ApiResponse,
    ) -> std::result::Result<Vec<String>, FetchError> {
        decode_body(Resource::Categories, response)
    }

    /// Decodes a products response into the page to display.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on a non-2xx status or a body that is not a JSON
    /// array of products.
    pub fn decode_products(
        &self,
        filter: &FilterState,
        response: &ApiResponse,
    ) -> std::result::Result<ProductPage, FetchError> {
        let mut products: Vec<Product> = decode_body(Resource::Products, response)?;

        if !filter.is_searching() {
            return Ok(ProductPage {
                products,
                matches: Vec::new(),
                total: None,
            });
        }

        sort_products(&mut products, filter.sort);
        let page = paginate(&products, filter.page()).to_vec();

        Ok(ProductPage {
            products: page,
            total: Some(products.len()),
            matches: products,
        })
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(
    resource: Resource,
    response: &ApiResponse,
) -> std::result::Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status {
            resource,
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| FetchError::Parse {
        resource,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField, SortKey};

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    fn products_json(count: usize) -> Vec<u8> {
        let items: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": {i}, "title": "Chips {i}", "category": "snacks", "price": {}, "rating": 4.0, "tags": ["crunchy"], "images": ["a.png", "b.png"]}}"#,
                    (i * 7) % 50
                )
            })
            .collect();
        format!("[{}]", items.join(",")).into_bytes()
    }

    #[test]
    fn category_page_two_requests_server_paging() {
        let api = CatalogApi::default();
        let filter = FilterState::new(Some("snacks".into()), None, None, 2);
        let request = api.products_request(&filter);

        assert_eq!(request.resource, Resource::Products);
        assert!(request.url.starts_with("https://next-ecommerce-api.vercel.app/products?"));

        let pairs = query_pairs(&request.url);
        assert!(pairs.contains(&("skip".into(), "20".into())));
        assert!(pairs.contains(&("limit".into(), "20".into())));
        assert!(pairs.contains(&("category".into(), "snacks".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn search_requests_everything_without_skip() {
        let api = CatalogApi::new("http://localhost:3000/", 500).unwrap();
        let filter = FilterState::new(
            None,
            Some("chips".into()),
            Some(SortKey::new(SortField::Price, SortDirection::Desc)),
            3,
        );
        let request = api.products_request(&filter);

        assert_eq!(
            request.url,
            "http://localhost:3000/products?search=chips&limit=500&sortBy=price&order=desc"
        );
    }

    #[test]
    fn search_decodes_sorted_first_page() {
        let api = CatalogApi::default();
        let filter = FilterState::new(
            None,
            Some("chips".into()),
            Some(SortKey::new(SortField::Price, SortDirection::Desc)),
            1,
        );
        let page = api
            .decode_products(&filter, &ApiResponse::new(200, products_json(45)))
            .unwrap();

        assert_eq!(page.products.len(), PAGE_SIZE);
        assert_eq!(page.matches.len(), 45);
        assert_eq!(page.total, Some(45));
        assert!(page.products.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(page.products[..], page.matches[..PAGE_SIZE]);
    }

    #[test]
    fn search_page_past_end_is_empty() {
        let api = CatalogApi::default();
        let filter = FilterState::new(None, Some("chips".into()), None, 9);
        let page = api
            .decode_products(&filter, &ApiResponse::new(200, products_json(12)))
            .unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.total, Some(12));
    }

    #[test]
    fn plain_listing_is_returned_as_is() {
        let api = CatalogApi::default();
        let filter = FilterState::default();
        let page = api
            .decode_products(&filter, &ApiResponse::new(200, products_json(3)))
            .unwrap();

        assert_eq!(page.products.len(), 3);
        assert!(page.matches.is_empty());
        assert_eq!(page.total, None);
        assert_eq!(page.products[1].tags, vec!["crunchy".to_string()]);
    }

    #[test]
    fn failures_become_fetch_errors() {
        let api = CatalogApi::default();
        let filter = FilterState::default();

        let err = api
            .decode_products(&filter, &ApiResponse::new(500, b"oops".to_vec()))
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                resource: Resource::Products,
                status: 500
            }
        );

        let err = api
            .decode_categories(&ApiResponse::new(200, b"{not json".to_vec()))
            .unwrap_err();
        assert!(matches!(err, FetchError::Parse { resource: Resource::Categories, .. }));
    }

    #[test]
    fn categories_request_and_decode() {
        let api = CatalogApi::default();
        let request = api.categories_request();
        assert_eq!(request.url, "https://next-ecommerce-api.vercel.app/categories");

        let categories = api
            .decode_categories(&ApiResponse::new(200, br#"["snacks","drinks"]"#.to_vec()))
            .unwrap();
        assert_eq!(categories, vec!["snacks", "drinks"]);
    }

    #[test]
    fn context_round_trips_through_tag() {
        let request = CatalogApi::default().categories_request();
        let context = request.context(42);
        assert_eq!(
            ResponseTag::from_context(&context),
            Some(ResponseTag {
                resource: Resource::Categories,
                token: 42
            })
        );
        assert_eq!(ResponseTag::from_context(&BTreeMap::new()), None);
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert!(matches!(
            CatalogApi::new("ftp://example.com", 10),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(
            CatalogApi::new("https://example.com", 0),
            Err(CatalogError::Config(_))
        ));
    }
}
