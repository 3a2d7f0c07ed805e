//! Derived catalog queries.
//!
//! Filtering happens over the in-memory catalog list, preserving its order.
//! No ranking is applied.

use super::model::Product;

/// Products whose category display name equals `category` exactly
/// (case-sensitive).
pub fn filter_by_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category_name.as_deref() == Some(category))
        .collect()
}

/// Case-insensitive substring search over name, description and category
/// name. An empty or whitespace-only query returns the catalog unfiltered.
pub fn search(products: Vec<Product>, query: &str) -> Vec<Product> {
    let query = query.trim();
    if query.is_empty() {
        return products;
    }

    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category_name
                    .as_ref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}
