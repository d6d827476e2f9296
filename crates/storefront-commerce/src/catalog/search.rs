//! Catalog search by text and category.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductSnapshot;

/// Label that selects every category.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection for a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in this category.
    Category(String),
}

impl CategoryFilter {
    /// Parse a selector label; `"All"` selects every category.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// Like [`from_label`](Self::from_label), but a label naming none of
    /// `known` falls back to every category.
    pub fn resolve(label: &str, known: &[String]) -> Self {
        match Self::from_label(label) {
            CategoryFilter::Category(c) if !known.contains(&c) => CategoryFilter::All,
            filter => filter,
        }
    }

    /// Label shown in the selector.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(c) => c,
        }
    }

    fn matches(&self, product: &ProductSnapshot) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => product.category.as_deref() == Some(c.as_str()),
        }
    }
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[ProductSnapshot]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_ref()) {
        if !seen.contains(category) {
            seen.push(category.clone());
        }
    }
    seen
}

/// A catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductQuery {
    /// Lowercased search term, matched against name and description.
    pub search: Option<String>,
    /// Category selection.
    pub category: CategoryFilter,
}

impl ProductQuery {
    /// Create a query that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term. An empty term matches everything.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Check whether `product` satisfies both the term and the category.
    pub fn matches(&self, product: &ProductSnapshot) -> bool {
        self.matches_search(product) && self.category.matches(product)
    }

    /// Products that match, in catalog order.
    pub fn filter<'a>(&self, products: &'a [ProductSnapshot]) -> Vec<&'a ProductSnapshot> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_search(&self, product: &ProductSnapshot) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        product.name.to_lowercase().contains(term)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(term))
    }
}
