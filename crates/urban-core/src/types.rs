//! # Catalog Types
//!
//! Immutable catalog entries the ordering engine works on.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Pricing      │   │   SizeOption    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  Flat(Money)    │   │  label "400"    │       │
//! │  │  category       │   │  Sized(Vec<..>) │──►│  volume_ml 400  │       │
//! │  │  name           │   └─────────────────┘   │  price          │       │
//! │  │  flags          │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Category     │──►│  CategoryRules  │  one row per category        │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Source Invariant
//! A product is priced either flat or by size, never both and never neither.
//! `Pricing` makes the other two states unrepresentable; the catalog loader
//! rejects documents that carry them.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::CatalogEntry;
use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u32;

// =============================================================================
// Category
// =============================================================================

/// A product's fixed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Tea,
    Punsh,
    Seasonal,
    Ice,
    Food,
    Drinks,
}

impl Category {
    /// All categories in default display order.
    pub const ALL: [Category; 7] = [
        Category::Coffee,
        Category::Seasonal,
        Category::Tea,
        Category::Punsh,
        Category::Ice,
        Category::Drinks,
        Category::Food,
    ];

    /// Customization rules for this category.
    ///
    /// ## Rule Table
    /// ```text
    /// ┌───────────┬─────────────┬────────┬──────┬───────┐
    /// │ category  │ temperature │ extras │ milk │ syrup │
    /// ├───────────┼─────────────┼────────┼──────┼───────┤
    /// │ coffee    │             │   ✓    │  ✓   │   ✓   │
    /// │ seasonal  │             │   ✓    │  ✓   │   ✓   │
    /// │ tea       │             │   ✓    │      │   ✓   │
    /// │ punsh     │             │   ✓    │      │       │
    /// │ ice       │      ✓      │   ✓    │  ✓   │   ✓   │
    /// │ drinks    │      ✓      │        │      │       │
    /// │ food      │             │        │      │       │
    /// └───────────┴─────────────┴────────┴──────┴───────┘
    /// ```
    /// Product flags (`excludes_milk`, `excludes_syrup`, `is_juice_variant`)
    /// can only switch fields off on top of this table.
    pub const fn rules(self) -> CategoryRules {
        match self {
            Category::Coffee | Category::Seasonal => CategoryRules {
                temperature: false,
                extras: true,
                milk: true,
                syrup: true,
            },
            Category::Tea => CategoryRules {
                temperature: false,
                extras: true,
                milk: false,
                syrup: true,
            },
            Category::Punsh => CategoryRules {
                temperature: false,
                extras: true,
                milk: false,
                syrup: false,
            },
            Category::Ice => CategoryRules {
                temperature: true,
                extras: true,
                milk: true,
                syrup: true,
            },
            Category::Drinks => CategoryRules {
                temperature: true,
                extras: false,
                milk: false,
                syrup: false,
            },
            Category::Food => CategoryRules {
                temperature: false,
                extras: false,
                milk: false,
                syrup: false,
            },
        }
    }

    /// Default tab label shown in the category bar.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Coffee => "Кофе",
            Category::Tea => "Чай",
            Category::Punsh => "Пунши",
            Category::Seasonal => "Сезонное",
            Category::Ice => "Холодный кофе",
            Category::Food => "Еда",
            Category::Drinks => "Напитки",
        }
    }

    /// Wire name (`"coffee"`, `"punsh"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Tea => "tea",
            Category::Punsh => "punsh",
            Category::Seasonal => "seasonal",
            Category::Ice => "ice",
            Category::Food => "food",
            Category::Drinks => "drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the category rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRules {
    /// Warm/cold choice is offered (and required).
    pub temperature: bool,
    /// Cinnamon and sugar are offered.
    pub extras: bool,
    /// Milk is offered unless the product opts out.
    pub milk: bool,
    /// Syrup is offered unless the product opts out.
    pub syrup: bool,
}

// =============================================================================
// Sizes
// =============================================================================

/// A size a product can be ordered in.
///
/// The label is the volume in millilitres as printed on the menu (`"400"`).
/// `volume_ml` is the same number, parsed once when the catalog is loaded,
/// so tier decisions never re-parse free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub label: String,
    pub volume_ml: u32,
    pub price: Money,
}

impl SizeOption {
    /// Creates a size whose label is its volume.
    pub fn new(volume_ml: u32, price_rubles: i64) -> Self {
        SizeOption {
            label: volume_ml.to_string(),
            volume_ml,
            price: Money::from_rubles(price_rubles),
        }
    }
}

/// Where a product's base price comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pricing {
    /// One price, no size choice.
    Flat(Money),
    /// Price depends on the chosen size. Sorted ascending by volume, never empty.
    Sized(Vec<SizeOption>),
}

// =============================================================================
// Product
// =============================================================================

/// An immutable catalog entry.
///
/// Serialized in the catalog document shape (`cat`, `price` / `sizes`,
/// `noMilk`, `noSyrup`, `isBumble`), see [`CatalogEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogEntry", into = "CatalogEntry")]
pub struct Product {
    pub id: ProductId,
    pub category: Category,
    pub name: String,
    pub pricing: Pricing,
    /// Image file name relative to the configured image base URL.
    pub img: Option<String>,
    /// Milk is never offered for this product.
    pub excludes_milk: bool,
    /// Syrup is never offered for this product.
    pub excludes_syrup: bool,
    /// Juice-based drink: offers a juice flavor instead of milk.
    pub is_juice_variant: bool,
}

impl Product {
    /// Creates a flat-priced product with no flags set.
    pub fn flat(id: ProductId, category: Category, name: &str, price_rubles: i64) -> Self {
        Product::with_pricing(id, category, name, Pricing::Flat(Money::from_rubles(price_rubles)))
    }

    /// Creates a sized product with no flags set. Sizes are sorted by volume.
    pub fn sized(id: ProductId, category: Category, name: &str, mut sizes: Vec<SizeOption>) -> Self {
        sizes.sort_by_key(|s| s.volume_ml);
        Product::with_pricing(id, category, name, Pricing::Sized(sizes))
    }

    fn with_pricing(id: ProductId, category: Category, name: &str, pricing: Pricing) -> Self {
        Product {
            id,
            category,
            name: name.to_string(),
            pricing,
            img: None,
            excludes_milk: false,
            excludes_syrup: false,
            is_juice_variant: false,
        }
    }

    /// Marks the product as never taking milk.
    pub fn without_milk(mut self) -> Self {
        self.excludes_milk = true;
        self
    }

    /// Marks the product as never taking syrup.
    pub fn without_syrup(mut self) -> Self {
        self.excludes_syrup = true;
        self
    }

    /// Marks the product as a juice variant.
    pub fn juice_variant(mut self) -> Self {
        self.is_juice_variant = true;
        self
    }

    /// Sets the image file name.
    pub fn with_image(mut self, img: &str) -> Self {
        self.img = Some(img.to_string());
        self
    }

    /// Flat price, if the product is not sold by size.
    #[inline]
    pub fn flat_price(&self) -> Option<Money> {
        match self.pricing {
            Pricing::Flat(price) => Some(price),
            Pricing::Sized(_) => None,
        }
    }

    /// Declared sizes, ascending by volume. Empty for flat-priced products.
    #[inline]
    pub fn sizes(&self) -> &[SizeOption] {
        match &self.pricing {
            Pricing::Flat(_) => &[],
            Pricing::Sized(sizes) => sizes,
        }
    }

    /// Whether a size has to be chosen.
    #[inline]
    pub fn has_sizes(&self) -> bool {
        matches!(self.pricing, Pricing::Sized(_))
    }

    /// Looks up a declared size by label.
    pub fn size(&self, label: &str) -> Option<&SizeOption> {
        self.sizes().iter().find(|s| s.label == label)
    }

    /// Lowest price a customer can pay for the product before add-ons.
    pub fn starting_price(&self) -> Money {
        match &self.pricing {
            Pricing::Flat(price) => *price,
            Pricing::Sized(sizes) => sizes.first().map(|s| s.price).unwrap_or_default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_product_sorts_by_volume() {
        let product = Product::sized(
            1,
            Category::Coffee,
            "Капучино",
            vec![SizeOption::new(400, 250), SizeOption::new(200, 150), SizeOption::new(300, 200)],
        );
        let volumes: Vec<u32> = product.sizes().iter().map(|s| s.volume_ml).collect();
        assert_eq!(volumes, vec![200, 300, 400]);
        assert!(product.has_sizes());
        assert_eq!(product.flat_price(), None);
        assert_eq!(product.starting_price(), Money::from_rubles(150));
    }

    #[test]
    fn test_flat_product() {
        let product = Product::flat(2, Category::Food, "Круассан", 180);
        assert!(!product.has_sizes());
        assert!(product.sizes().is_empty());
        assert_eq!(product.flat_price(), Some(Money::from_rubles(180)));
        assert_eq!(product.starting_price(), Money::from_rubles(180));
    }

    #[test]
    fn test_size_lookup() {
        let product = Product::sized(3, Category::Tea, "Чай", vec![SizeOption::new(300, 120)]);
        assert_eq!(product.size("300"), Some(&SizeOption::new(300, 120)));
        assert_eq!(product.size("400"), None);
    }

    #[test]
    fn test_flags_builders() {
        let product = Product::flat(4, Category::Seasonal, "Бамбл", 260)
            .juice_variant()
            .without_syrup()
            .with_image("bumble.jpg");
        assert!(product.is_juice_variant);
        assert!(product.excludes_syrup);
        assert!(!product.excludes_milk);
        assert_eq!(product.img.as_deref(), Some("bumble.jpg"));
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Punsh).unwrap(), "\"punsh\"");
        let cat: Category = serde_json::from_str("\"drinks\"").unwrap();
        assert_eq!(cat, Category::Drinks);
        assert_eq!(Category::Ice.to_string(), "ice");
    }

    #[test]
    fn test_food_and_drinks_have_no_extras() {
        assert!(!Category::Food.rules().extras);
        assert!(!Category::Drinks.rules().extras);
        assert!(Category::Drinks.rules().temperature);
        assert!(!Category::Punsh.rules().syrup);
        assert!(!Category::Tea.rules().milk);
    }
}
