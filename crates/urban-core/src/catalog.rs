//! # Catalog
//!
//! The menu document, its authoring checks, and category browsing.
//!
//! ## Document Format
//! ```json
//! {
//!   "categories": [{ "id": "coffee", "label": "Кофе" }],
//!   "items": [
//!     { "id": 1, "cat": "coffee", "name": "Латте",
//!       "sizes": { "300": 220, "400": 260 }, "img": "latte.jpg" },
//!     { "id": 2, "cat": "food", "name": "Круассан", "price": 180 },
//!     { "id": 3, "cat": "seasonal", "name": "Бамбл", "sizes": { "300": 260 },
//!       "isBumble": true, "noSyrup": true }
//!   ]
//! }
//! ```
//!
//! ## Authoring Contract
//! Checked once at load time, so the pricing engine can stay total:
//! - ids are unique, names are non-empty
//! - exactly one of `price` / `sizes`
//! - prices are non-negative, `sizes` is non-empty
//! - size labels are integer volumes in ml

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::stop_list::StopList;
use crate::types::{Category, Pricing, Product, ProductId, SizeOption};
use crate::validation::{validate_price, validate_product_name, validate_size_label, ValidationResult};

// =============================================================================
// Catalog Entry (document shape)
// =============================================================================

/// A product as written in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: ProductId,
    pub cat: Category,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub price: Option<Money>,
    /// Size label (volume in ml) to price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sizes: Option<BTreeMap<String, Money>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub img: Option<String>,
    #[serde(default)]
    pub no_milk: bool,
    #[serde(default)]
    pub no_syrup: bool,
    /// Juice variant.
    #[serde(default)]
    pub is_bumble: bool,
}

fn sizes_from_document(sizes: BTreeMap<String, Money>) -> ValidationResult<Vec<SizeOption>> {
    if sizes.is_empty() {
        return Err(ValidationError::Required {
            field: "sizes".to_string(),
        });
    }

    let mut options = sizes
        .into_iter()
        .map(|(label, price)| {
            let volume_ml = validate_size_label(&label)?;
            validate_price("size price", price)?;
            Ok(SizeOption {
                label: label.trim().to_string(),
                volume_ml,
                price,
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    options.sort_by_key(|s| s.volume_ml);

    if let Some(pair) = options.windows(2).find(|w| w[0].volume_ml == w[1].volume_ml) {
        return Err(ValidationError::Duplicate {
            field: "size".to_string(),
            value: pair[1].label.clone(),
        });
    }

    Ok(options)
}

impl TryFrom<CatalogEntry> for Product {
    type Error = ValidationError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        validate_product_name(&entry.name)?;

        let pricing = match (entry.price, entry.sizes) {
            (Some(_), Some(_)) => {
                return Err(ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: "a product has either a price or sizes, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(ValidationError::Required {
                    field: "price".to_string(),
                })
            }
            (Some(price), None) => {
                validate_price("price", price)?;
                Pricing::Flat(price)
            }
            (None, Some(sizes)) => Pricing::Sized(sizes_from_document(sizes)?),
        };

        Ok(Product {
            id: entry.id,
            category: entry.cat,
            name: entry.name.trim().to_string(),
            pricing,
            img: entry.img,
            excludes_milk: entry.no_milk,
            excludes_syrup: entry.no_syrup,
            is_juice_variant: entry.is_bumble,
        })
    }
}

impl From<Product> for CatalogEntry {
    fn from(product: Product) -> Self {
        let (price, sizes) = match product.pricing {
            Pricing::Flat(price) => (Some(price), None),
            Pricing::Sized(sizes) => (
                None,
                Some(sizes.into_iter().map(|s| (s.label, s.price)).collect()),
            ),
        };

        CatalogEntry {
            id: product.id,
            cat: product.category,
            name: product.name,
            price,
            sizes,
            img: product.img,
            no_milk: product.excludes_milk,
            no_syrup: product.excludes_syrup,
            is_bumble: product.is_juice_variant,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryInfo {
    pub id: Category,
    pub label: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        CategoryInfo {
            id: category,
            label: category.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<CategoryInfo>,
    items: Vec<CatalogEntry>,
}

/// A product tile in the category grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub product_id: ProductId,
    pub name: String,
    pub price_hint: String,
    pub img: Option<String>,
    /// Only ever `true` in admin mode; ordinary users never see stopped tiles.
    pub stopped: bool,
}

/// Tile price text: `"180 ₽"` for flat products, `"от 220 ₽"` for sized ones.
pub fn price_hint(product: &Product) -> String {
    match &product.pricing {
        Pricing::Flat(price) => price.to_string(),
        Pricing::Sized(_) => format!("от {}", product.starting_price()),
    }
}

/// The loaded, validated menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<CategoryInfo>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate product ids.
    ///
    /// An empty category list falls back to every category with its
    /// default label.
    pub fn new(categories: Vec<CategoryInfo>, products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        let categories = if categories.is_empty() {
            Category::ALL.into_iter().map(CategoryInfo::from).collect()
        } else {
            categories
        };

        Ok(Catalog {
            categories,
            products,
        })
    }

    /// Parses and validates a catalog document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let products = document
            .items
            .into_iter()
            .map(|entry| {
                let product_id = entry.id;
                Product::try_from(entry)
                    .map_err(|source| CoreError::InvalidProduct { product_id, source })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Catalog::new(document.categories, products)
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`product`](Self::product), but unknown ids are an error.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.product(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Tiles of one category in catalog order.
    ///
    /// Stopped products are hidden from ordinary users and shown flagged
    /// to admins.
    pub fn browse(&self, category: Category, stop_list: &StopList, admin: bool) -> Vec<Tile> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .filter_map(|p| {
                let stopped = stop_list.contains(p.id);
                if stopped && !admin {
                    return None;
                }
                Some(Tile {
                    product_id: p.id,
                    name: p.name.clone(),
                    price_hint: price_hint(p),
                    img: p.img.clone(),
                    stopped,
                })
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
