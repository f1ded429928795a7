//! # Product Sheet State
//!
//! The bottom sheet a customer configures a product on.
//!
//! ```text
//!  open_product ──► ProductSheet { options: empty }
//!                        │
//!          choose ───────┤  ensure_applicable, then toggle
//!                        │  (price recomputed on every view)
//!                        ▼
//!  add_to_cart ──► check_complete ──► Err(Incomplete) ─► sheet stays open
//!                        │
//!                        └──────────► Ok(LineItem)    ─► sheet closes
//! ```

use serde::Serialize;
use urban_core::pricing::{compose_line_item, describe, price_breakdown, PriceBreakdown};
use urban_core::visibility::{applicable_fields, check_complete, ensure_applicable, Incomplete};
use urban_core::{Choice, CoreResult, FieldKind, LineItem, Product, ProductId, SelectedOptions, SizeOption};

/// A product being configured.
#[derive(Debug, Clone)]
pub struct ProductSheet {
    product: Product,
    options: SelectedOptions,
}

impl ProductSheet {
    /// Opens a sheet with nothing selected.
    pub fn open(product: Product) -> Self {
        ProductSheet {
            product,
            options: SelectedOptions::default(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn options(&self) -> &SelectedOptions {
        &self.options
    }

    /// Applies a pick. Picks for fields the product does not offer are
    /// rejected and leave the selection untouched.
    pub fn choose(&mut self, choice: Choice) -> CoreResult<()> {
        ensure_applicable(&self.product, &choice)?;
        self.options.toggle(choice);
        Ok(())
    }

    pub fn price(&self) -> PriceBreakdown {
        price_breakdown(&self.product, &self.options)
    }

    /// Freezes the selection into a cart entry at the live price.
    pub fn finish(&self) -> Result<LineItem, Incomplete> {
        check_complete(&self.product, &self.options)?;
        Ok(compose_line_item(
            &self.product,
            &self.options,
            self.price().total,
        ))
    }

    /// Snapshot for the web view.
    pub fn view(&self) -> SheetView {
        let description = describe(&self.product, &self.options);
        SheetView {
            product_id: self.product.id,
            name: description.display_name,
            details: description.details,
            fields: applicable_fields(&self.product).iter().collect(),
            sizes: self.product.sizes().to_vec(),
            options: self.options.clone(),
            price: self.price(),
            missing: check_complete(&self.product, &self.options).err(),
        }
    }
}

/// What the web view renders for an open sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub product_id: ProductId,
    pub name: String,
    pub details: String,
    /// Option groups to show, in display order
    pub fields: Vec<FieldKind>,
    pub sizes: Vec<SizeOption>,
    pub options: SelectedOptions,
    pub price: PriceBreakdown,
    /// First mandatory field still unset, if any
    pub missing: Option<Incomplete>,
}
