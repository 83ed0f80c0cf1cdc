//! The catalog's data model and the small pure helpers shared by the pages.

use serde::{Deserialize, Serialize};

/// A product as stored by the catalog API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    /// Assigned by the API; absent until the product is persisted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The body of a `POST /products` request: a product without its id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductDraft {
    /// Build a draft from raw form values. A blank image URL is left out of the request.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>, image: &str) -> Self {
        let image = image.trim();
        Self {
            name: name.into(),
            price,
            category: category.into(),
            image: (!image.is_empty()).then(|| image.to_string()),
        }
    }
}

/// A partial product used by `PUT /products/{id}`. Unset fields are not sent.
#[derive(Serialize, PartialEq, Clone, Debug, Default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Category names are stored lower-cased and without surrounding whitespace.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Upper-case the first character of a category name for display.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a price with two decimals, the way it is shown on product cards.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Parse a price typed by the user. Only finite, non-negative numbers are accepted.
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Products whose name contains `search` (ignoring case) and, when `category` is not
/// empty, whose category is exactly `category`.
pub fn filter_products<'a>(products: &'a [Product], search: &str, category: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .filter(|product| category.is_empty() || product.category == category)
        .collect()
}

/// Replace the product with the same id as `updated`. Returns whether an entry matched.
pub fn replace_product(products: &mut [Product], updated: Product) -> bool {
    match products.iter_mut().find(|p| p.id.is_some() && p.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop the first product with the given id. Returns whether an entry was removed.
pub fn remove_product(products: &mut Vec<Product>, id: &str) -> bool {
    match products.iter().position(|p| p.id.as_deref() == Some(id)) {
        Some(index) => {
            products.remove(index);
            true
        }
        None => false,
    }
}
