//! # Option Visibility & Validation Engine
//!
//! Decides which fields a product sheet shows and whether the current
//! selection is enough to add the product to the cart.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Product ──► Category::rules() ──┐                                     │
//! │      │                            ├──► applicable_fields() ──► FieldSet │
//! │      └──► flags (noMilk, ...) ────┘                                     │
//! │                                                                         │
//! │   Product + SelectedOptions ──► check_complete()                        │
//! │        1. sizes declared and none chosen?   ──► MissingSize             │
//! │        2. temperature shown and none chosen? ──► MissingTemperature     │
//! │        3. otherwise                          ──► Ok                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Milk, syrup, sugar, cinnamon and juice flavor are always optional.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::alerts;
use crate::error::{CoreError, CoreResult};
use crate::options::{Choice, FieldKind, SelectedOptions};
use crate::types::Product;

// =============================================================================
// Field Set
// =============================================================================

/// A small set of [`FieldKind`]s, iterated in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    #[inline]
    pub const fn empty() -> Self {
        FieldSet(0)
    }

    #[inline]
    const fn bit(field: FieldKind) -> u8 {
        1 << field as u8
    }

    /// Returns the set with `field` added.
    #[inline]
    #[must_use]
    pub const fn with(self, field: FieldKind) -> Self {
        FieldSet(self.0 | Self::bit(field))
    }

    #[inline]
    pub const fn contains(&self, field: FieldKind) -> bool {
        self.0 & Self::bit(field) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldKind> + '_ {
        FieldKind::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl FromIterator<FieldKind> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldKind>>(iter: I) -> Self {
        iter.into_iter().fold(FieldSet::empty(), FieldSet::with)
    }
}

impl Serialize for FieldSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Fields the product sheet offers for `product`.
///
/// ```rust
/// use urban_core::options::FieldKind;
/// use urban_core::types::{Category, Product};
/// use urban_core::visibility::applicable_fields;
///
/// let croissant = Product::flat(1, Category::Food, "Круассан", 180);
/// assert!(applicable_fields(&croissant).is_empty());
///
/// let tea = Product::flat(2, Category::Tea, "Чай", 150);
/// let fields = applicable_fields(&tea);
/// assert!(fields.contains(FieldKind::Syrup));
/// assert!(!fields.contains(FieldKind::Milk));
/// ```
pub fn applicable_fields(product: &Product) -> FieldSet {
    let rules = product.category.rules();
    let mut fields = FieldSet::empty();

    if rules.temperature {
        fields = fields.with(FieldKind::Temperature);
    }
    if product.has_sizes() {
        fields = fields.with(FieldKind::Size);
    }
    if rules.milk && !product.is_juice_variant && !product.excludes_milk {
        fields = fields.with(FieldKind::Milk);
    }
    if product.is_juice_variant {
        fields = fields.with(FieldKind::JuiceFlavor);
    }
    if rules.syrup && !product.excludes_syrup {
        fields = fields.with(FieldKind::Syrup);
    }
    if rules.extras {
        fields = fields.with(FieldKind::Cinnamon).with(FieldKind::Sugar);
    }

    fields
}

/// Rejects a pick for a field the product does not show, or a size the
/// product does not declare.
pub fn ensure_applicable(product: &Product, choice: &Choice) -> CoreResult<()> {
    let field = choice.field();
    if !applicable_fields(product).contains(field) {
        return Err(CoreError::FieldNotApplicable {
            product_id: product.id,
            field,
        });
    }

    if let Choice::Size(size) = choice {
        if product.size(&size.label) != Some(size) {
            return Err(CoreError::UnknownSize {
                product_id: product.id,
                label: size.label.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Completeness
// =============================================================================

/// Why a selection cannot be added to the cart yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Incomplete {
    MissingSize,
    MissingTemperature,
}

impl Incomplete {
    /// Alert text the host shows to the customer.
    pub const fn alert_message(self) -> &'static str {
        match self {
            Incomplete::MissingSize => alerts::CHOOSE_SIZE,
            Incomplete::MissingTemperature => alerts::CHOOSE_TEMPERATURE,
        }
    }
}

impl fmt::Display for Incomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alert_message())
    }
}

/// Checks the mandatory fields, size first.
pub fn check_complete(product: &Product, options: &SelectedOptions) -> Result<(), Incomplete> {
    if product.has_sizes() && options.size.is_none() {
        return Err(Incomplete::MissingSize);
    }
    if product.category.rules().temperature && options.temperature.is_none() {
        return Err(Incomplete::MissingTemperature);
    }
    Ok(())
}

/// `true` when the selection may be added to the cart.
#[inline]
pub fn is_complete(product: &Product, options: &SelectedOptions) -> bool {
    check_complete(product, options).is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
