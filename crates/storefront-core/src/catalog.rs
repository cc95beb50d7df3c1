//! # Catalog
//!
//! The validated, ordered product set and the filtered views derived from it.
//!
//! ## Filtering Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Visible Products                                     │
//! │                                                                         │
//! │  Catalog (catalog order)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category == filter.category  (or filter = All)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  title.to_lowercase() contains search_text.to_lowercase()               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Product>  (subset, catalog order preserved)                       │
//! │                                                                         │
//! │  Recomputed on every call: nothing to invalidate.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CategoryOption, FilterCriteria, Product, ProductId};
use crate::validation::{validate_product, validate_unique_ids};

/// An immutable product set that passed validation.
///
/// ## Invariants
/// - Product ids are unique
/// - Every price is between zero and [`crate::money::MAX_PRICE`]
/// - Order is the order the source returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting the whole set if any record is invalid.
    pub fn new(products: Vec<Product>) -> Result<Self, ValidationError> {
        for product in &products {
            validate_product(product)?;
        }
        validate_unique_ids(&products)?;

        Ok(Catalog { products })
    }

    /// An empty catalog (before load, or after a failed one).
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products passing `filter`, in catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::catalog::Catalog;
    /// use storefront_core::types::{CategoryFilter, FilterCriteria, Product, ProductId};
    /// use storefront_core::Money;
    ///
    /// let catalog = Catalog::new(vec![Product {
    ///     id: ProductId::new(1),
    ///     title: "Red Shirt".into(),
    ///     price: Money::from_cents(2000),
    ///     image: "https://example.com/shirt.png".into(),
    ///     category: "clothes".into(),
    ///     description: None,
    /// }]).unwrap();
    ///
    /// let filter = FilterCriteria::new(CategoryFilter::All, "shirt");
    /// assert_eq!(catalog.visible(&filter).len(), 1);
    /// ```
    pub fn visible(&self, filter: &FilterCriteria) -> Vec<&Product> {
        let needle = filter.search_text.to_lowercase();

        self.products
            .iter()
            .filter(|p| filter.category.matches(&p.category) && p.title_contains(&needle))
            .collect()
    }

    /// Distinct categories present in the catalog, in first-seen order.
    ///
    /// Names are the raw ids; the fixed menu in
    /// [`crate::types::default_categories`] carries display names.
    pub fn categories(&self) -> Vec<CategoryOption> {
        let mut seen: Vec<&str> = Vec::new();

        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }

        seen.into_iter()
            .map(|c| CategoryOption::new(c, c))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::CategoryFilter;

    fn product(id: u64, title: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(cents),
            image: format!("https://example.com/{}.png", id),
            category: category.to_string(),
            description: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(2, "Phone X", 20000, "mobiles"),
            product(3, "Blue Shirt", 2500, "clothes"),
            product(4, "Smart TV", 45000, "electronics"),
        ])
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(1, "Phone X", 20000, "mobiles"),
        ]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_new_rejects_negative_price() {
        let result = Catalog::new(vec![product(1, "Red Shirt", -1, "clothes")]);
        assert!(matches!(result, Err(ValidationError::Negative { .. })));
    }

    #[test]
    fn test_new_keeps_blank_titles_and_categories() {
        let catalog = Catalog::new(vec![
            product(1, "Red Shirt", 2000, "clothes"),
            product(2, "", 500, ""),
        ])
        .unwrap();

        assert_eq!(ids(&catalog.visible(&FilterCriteria::default())), vec![1, 2]);
        let filter = FilterCriteria::new(CategoryFilter::All, "shirt");
        assert_eq!(ids(&catalog.visible(&filter)), vec![1]);
    }

    #[test]
    fn test_visible_with_default_filter_is_whole_catalog() {
        let catalog = sample_catalog();
        let visible = catalog.visible(&FilterCriteria::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_visible_by_category_preserves_order() {
        let catalog = sample_catalog();
        let filter = FilterCriteria::new(CategoryFilter::from_id("clothes"), "");
        assert_eq!(ids(&catalog.visible(&filter)), vec![1, 3]);
    }

    #[test]
    fn test_visible_by_search_is_case_insensitive() {
        let catalog = sample_catalog();
        let filter = FilterCriteria::new(CategoryFilter::All, "sHiRt");
        assert_eq!(ids(&catalog.visible(&filter)), vec![1, 3]);
    }

    #[test]
    fn test_visible_combines_category_and_search() {
        let catalog = sample_catalog();
        let filter = FilterCriteria::new(CategoryFilter::from_id("clothes"), "blue");
        assert_eq!(ids(&catalog.visible(&filter)), vec![3]);

        let filter = FilterCriteria::new(CategoryFilter::from_id("mobiles"), "shirt");
        assert!(catalog.visible(&filter).is_empty());
    }

    #[test]
    fn test_visible_unknown_category_is_empty() {
        let catalog = sample_catalog();
        let filter = FilterCriteria::new(CategoryFilter::from_id("jewelery"), "");
        assert!(catalog.visible(&filter).is_empty());
    }

    #[test]
    fn test_visible_is_always_an_ordered_subset() {
        let catalog = sample_catalog();
        let searches = ["", "s", "x", "shirt", "TV", "zzz"];
        let categories = ["all", "clothes", "mobiles", "electronics", "none"];

        for category in categories {
            for search in searches {
                let filter = FilterCriteria::new(CategoryFilter::from_id(category), search);
                let visible = ids(&catalog.visible(&filter));

                let mut positions = visible.iter().map(|id| {
                    catalog
                        .products()
                        .iter()
                        .position(|p| p.id.get() == *id)
                        .expect("visible product must come from the catalog")
                });
                let mut last = None;
                for pos in positions.by_ref() {
                    assert!(last.map_or(true, |l| pos > l), "order broken for {:?}", filter);
                    last = Some(pos);
                }
            }
        }
    }

    #[test]
    fn test_get() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().title, "Phone X");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories: Vec<String> = sample_catalog()
            .categories()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(categories, vec!["clothes", "mobiles", "electronics"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.visible(&FilterCriteria::default()).is_empty());
        assert!(catalog.categories().is_empty());
    }
}
