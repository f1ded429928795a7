//! # Price & Description Composer
//!
//! Turns a product and a selection into a price and a line-item text.
//!
//! ## Pricing Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  base  = flat price                    (flat products)                  │
//! │        | price of the chosen size      (sized products)                 │
//! │        | 0                             (sized, nothing chosen yet)      │
//! │                                                                         │
//! │  tier  = Large  if chosen volume > 300 ml                               │
//! │        | Small  otherwise (including flat products)                     │
//! │                                                                         │
//! │                       Small    Large                                    │
//! │  non-default milk     +70      +90                                      │
//! │  any syrup            +30      +50                                      │
//! │                                                                         │
//! │  total = base + milk surcharge + syrup surcharge                        │
//! │  Sugar and cinnamon never change the price.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use urban_core::options::{Choice, Milk, SelectedOptions, Syrup};
//! use urban_core::pricing::compute_price;
//! use urban_core::types::{Category, Product, SizeOption};
//!
//! let latte = Product::sized(1, Category::Coffee, "Латте", vec![
//!     SizeOption::new(200, 150),
//!     SizeOption::new(400, 250),
//! ]);
//! let options = SelectedOptions::default()
//!     .toggled(Choice::Size(SizeOption::new(400, 250)))
//!     .toggled(Choice::Milk(Milk::Coconut))
//!     .toggled(Choice::Syrup(Syrup::Caramel));
//!
//! assert_eq!(compute_price(&latte, &options).rubles(), 250 + 90 + 50);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::money::Money;
use crate::options::SelectedOptions;
use crate::types::{Product, SizeOption};

/// Volumes above this many millilitres take the large surcharges.
pub const LARGE_SIZE_THRESHOLD_ML: u32 = 300;

/// Separator between description fragments.
pub const FRAGMENT_SEPARATOR: &str = " ";

// =============================================================================
// Size Tier
// =============================================================================

/// Surcharge tier derived from the chosen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    Small,
    Large,
}

impl SizeTier {
    /// Tier of a chosen size. No size counts as small.
    pub fn of(size: Option<&SizeOption>) -> Self {
        match size {
            Some(size) if size.volume_ml > LARGE_SIZE_THRESHOLD_ML => SizeTier::Large,
            _ => SizeTier::Small,
        }
    }

    pub const fn milk_surcharge(self) -> Money {
        match self {
            SizeTier::Small => Money::from_rubles(70),
            SizeTier::Large => Money::from_rubles(90),
        }
    }

    pub const fn syrup_surcharge(self) -> Money {
        match self {
            SizeTier::Small => Money::from_rubles(30),
            SizeTier::Large => Money::from_rubles(50),
        }
    }
}

// =============================================================================
// Price
// =============================================================================

/// Itemized price shown live on the product sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: Money,
    pub milk: Money,
    pub syrup: Money,
    pub total: Money,
}

/// Base price before any surcharge.
pub fn base_price(product: &Product, options: &SelectedOptions) -> Money {
    product
        .flat_price()
        .or_else(|| options.size.as_ref().map(|s| s.price))
        .unwrap_or_default()
}

/// Computes the itemized price of the current selection.
pub fn price_breakdown(product: &Product, options: &SelectedOptions) -> PriceBreakdown {
    let base = base_price(product, options);
    let tier = SizeTier::of(options.size.as_ref());

    let milk = match options.milk {
        Some(milk) if !milk.is_default() => tier.milk_surcharge(),
        _ => Money::zero(),
    };
    let syrup = if options.syrup.is_some() {
        tier.syrup_surcharge()
    } else {
        Money::zero()
    };

    PriceBreakdown {
        base,
        milk,
        syrup,
        total: base + milk + syrup,
    }
}

/// Total price of the current selection.
#[inline]
pub fn compute_price(product: &Product, options: &SelectedOptions) -> Money {
    price_breakdown(product, options).total
}

// =============================================================================
// Description
// =============================================================================

/// Human-readable text of a configured product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    /// Product name, plus the size when one is chosen: `"Латте 400мл"`.
    pub display_name: String,
    /// Every other populated option: `"(Овсяное) +Карамель сахар 5г"`.
    pub details: String,
}

impl Description {
    /// Full single-line text: display name followed by details.
    pub fn full_text(&self) -> String {
        if self.details.is_empty() {
            self.display_name.clone()
        } else {
            format!("{}{}{}", self.display_name, FRAGMENT_SEPARATOR, self.details)
        }
    }
}

fn size_fragment(size: &SizeOption) -> String {
    format!("{}мл", size.label)
}

/// Fragments for every populated option except size, in fixed order:
/// temperature, milk, syrup, juice flavor, cinnamon, sugar.
fn option_fragments(options: &SelectedOptions) -> Vec<String> {
    let mut fragments = Vec::new();
    if let Some(t) = options.temperature {
        fragments.push(format!("[{}]", t));
    }
    if let Some(m) = options.milk {
        fragments.push(format!("({})", m));
    }
    if let Some(s) = options.syrup {
        fragments.push(format!("+{}", s));
    }
    if let Some(j) = options.juice_flavor {
        fragments.push(format!("сок: {}", j));
    }
    if options.cinnamon {
        fragments.push("+корица".to_string());
    }
    if let Some(s) = options.sugar {
        fragments.push(format!("сахар {}", s));
    }
    fragments
}

/// All fragments in order, size first.
pub fn detail_fragments(options: &SelectedOptions) -> Vec<String> {
    let mut fragments: Vec<String> = options.size.iter().map(size_fragment).collect();
    fragments.extend(option_fragments(options));
    fragments
}

/// Composes the display name and details string.
pub fn describe(product: &Product, options: &SelectedOptions) -> Description {
    let display_name = match &options.size {
        Some(size) => format!("{}{}{}", product.name, FRAGMENT_SEPARATOR, size_fragment(size)),
        None => product.name.clone(),
    };

    Description {
        display_name,
        details: option_fragments(options).join(FRAGMENT_SEPARATOR),
    }
}

/// Freezes a configured product into a cart entry.
///
/// `price` is taken as given: callers pass the price they showed the
/// customer, normally [`compute_price`] of the same selection.
pub fn compose_line_item(product: &Product, options: &SelectedOptions, price: Money) -> LineItem {
    LineItem::new(product, describe(product, options), price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Choice, JuiceFlavor, Milk, Sugar, Syrup, Temperature};
    use crate::types::Category;

    fn latte() -> Product {
        Product::sized(
            1,
            Category::Coffee,
            "Латте",
            vec![SizeOption::new(200, 150), SizeOption::new(400, 250)],
        )
    }

    fn with(choices: Vec<Choice>) -> SelectedOptions {
        choices
            .into_iter()
            .fold(SelectedOptions::default(), SelectedOptions::toggled)
    }

    #[test]
    fn test_sized_product_without_size_costs_nothing() {
        assert_eq!(compute_price(&latte(), &SelectedOptions::default()), Money::zero());
    }

    #[test]
    fn test_milk_surcharge_small_and_large() {
        let small = with(vec![
            Choice::Size(SizeOption::new(200, 150)),
            Choice::Milk(Milk::Coconut),
        ]);
        assert_eq!(compute_price(&latte(), &small).rubles(), 220);

        let large = with(vec![
            Choice::Size(SizeOption::new(400, 250)),
            Choice::Milk(Milk::Coconut),
        ]);
        assert_eq!(compute_price(&latte(), &large).rubles(), 340);
    }

    #[test]
    fn test_default_milk_is_free() {
        let options = with(vec![
            Choice::Size(SizeOption::new(400, 250)),
            Choice::Milk(Milk::Regular),
        ]);
        assert_eq!(compute_price(&latte(), &options).rubles(), 250);
    }

    #[test]
    fn test_syrup_stacks_with_milk() {
        let options = with(vec![
            Choice::Size(SizeOption::new(400, 250)),
            Choice::Milk(Milk::Oat),
            Choice::Syrup(Syrup::Vanilla),
        ]);
        let breakdown = price_breakdown(&latte(), &options);
        assert_eq!(breakdown.base.rubles(), 250);
        assert_eq!(breakdown.milk.rubles(), 90);
        assert_eq!(breakdown.syrup.rubles(), 50);
        assert_eq!(breakdown.total.rubles(), 390);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(SizeTier::of(Some(&SizeOption::new(300, 200))), SizeTier::Small);
        assert_eq!(SizeTier::of(Some(&SizeOption::new(301, 200))), SizeTier::Large);
        assert_eq!(SizeTier::of(None), SizeTier::Small);
    }

    #[test]
    fn test_flat_product_uses_small_tier() {
        let raf = Product::flat(2, Category::Seasonal, "Раф", 280);
        let options = with(vec![Choice::Milk(Milk::Almond), Choice::Syrup(Syrup::Mint)]);
        assert_eq!(compute_price(&raf, &options).rubles(), 280 + 70 + 30);
    }

    #[test]
    fn test_sugar_and_cinnamon_are_free() {
        let options = with(vec![
            Choice::Size(SizeOption::new(200, 150)),
            Choice::Sugar(Sugar::Grams15),
            Choice::Cinnamon,
        ]);
        assert_eq!(compute_price(&latte(), &options).rubles(), 150);
    }

    #[test]
    fn test_describe_full_selection() {
        let options = with(vec![
            Choice::Size(SizeOption::new(400, 250)),
            Choice::Temperature(Temperature::Cold),
            Choice::Milk(Milk::Oat),
            Choice::Syrup(Syrup::Caramel),
            Choice::JuiceFlavor(JuiceFlavor::Orange),
            Choice::Cinnamon,
            Choice::Sugar(Sugar::Grams5),
        ]);
        let description = describe(&latte(), &options);
        assert_eq!(description.display_name, "Латте 400мл");
        assert_eq!(
            description.details,
            "[Холодный] (Овсяное) +Карамель сок: Апельсиновый +корица сахар 5г"
        );
        assert_eq!(
            description.full_text(),
            "Латте 400мл [Холодный] (Овсяное) +Карамель сок: Апельсиновый +корица сахар 5г"
        );
        assert_eq!(detail_fragments(&options).len(), 7);
        assert_eq!(detail_fragments(&options)[0], "400мл");
    }

    #[test]
    fn test_describe_plain_product() {
        let croissant = Product::flat(3, Category::Food, "Круассан", 180);
        let description = describe(&croissant, &SelectedOptions::default());
        assert_eq!(description.display_name, "Круассан");
        assert_eq!(description.details, "");
        assert_eq!(description.full_text(), "Круассан");
    }

    #[test]
    fn test_compose_line_item() {
        let options = with(vec![
            Choice::Size(SizeOption::new(200, 150)),
            Choice::Syrup(Syrup::Hazelnut),
        ]);
        let price = compute_price(&latte(), &options);
        let item = compose_line_item(&latte(), &options, price);
        assert_eq!(item.product_id, 1);
        assert_eq!(item.name, "Латте 200мл");
        assert_eq!(item.base_name, "Латте");
        assert_eq!(item.details, "+Лесной орех");
        assert_eq!(item.price.rubles(), 180);
    }
}
