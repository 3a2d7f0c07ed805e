use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::SessionId;

use super::errors::CartError;

/// One cart row for a distinct product.
///
/// Display fields are copied from the product at add time, so later catalog
/// edits never retroactively change lines already in a cart.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    /// Unit price in the base currency, snapshotted at add time.
    pub unit_price: BigDecimal,
    pub image_url: String,
    pub category_name: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// A visitor's shopping cart.
///
/// Invariant: at most one line item per distinct product id. Totals are
/// always derived from the line list, never cached.
#[derive(Debug, Clone)]
pub struct Cart {
    pub session_id: SessionId,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(session_id: SessionId) -> Self {
        Self {
            session_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn from_repository(
        session_id: SessionId,
        items: Vec<CartItem>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            items,
            updated_at,
        }
    }

    /// Adds one unit of `product`. An existing line for the same product id
    /// is incremented; otherwise a new line with quantity 1 snapshots the
    /// product's display fields.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price.clone(),
                image_url: product.image_url.clone(),
                category_name: product.category_name.clone(),
                quantity: 1,
            });
        }
        self.updated_at = Utc::now();
    }

    /// Sets the quantity of an existing line. Quantities below 1 are
    /// rejected; removal is only ever explicit via `remove_item`.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::QuantityInvalid);
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CartError::ProductNotFound)?;

        item.quantity = quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes the line for `product_id`. No-op when absent.
    pub fn remove_item(&mut self, product_id: Uuid) {
        self.items.retain(|i| i.product_id != product_id);
        self.updated_at = Utc::now();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line subtotals, in the base currency.
    pub fn total_price(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, i| acc + i.subtotal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn product(name: &str, price: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            description: String::new(),
            price: BigDecimal::from_str(price).unwrap(),
            category_id: None,
            category_name: Some("soins-visage".to_string()),
            image_url: "https://example.com/p.jpg".to_string(),
            video_url: None,
        })
        .unwrap()
    }

    fn cart() -> Cart {
        Cart::empty(SessionId::new("test-session"))
    }

    #[test]
    fn should_merge_duplicate_adds_into_one_line() {
        let mut cart = cart();
        let serum = product("Sérum Vitamine C Bio", "45.00");

        cart.add_product(&serum);
        cart.add_product(&serum);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn should_snapshot_display_fields_at_add_time() {
        let mut cart = cart();
        let mut serum = product("Sérum Vitamine C Bio", "45.00");

        cart.add_product(&serum);
        serum.name = "Renamed".to_string();
        serum.price = BigDecimal::from_str("99.00").unwrap();

        assert_eq!(cart.items[0].name, "Sérum Vitamine C Bio");
        assert_eq!(cart.items[0].unit_price, BigDecimal::from_str("45.00").unwrap());
    }

    #[test]
    fn should_compute_totals_from_line_items() {
        let mut cart = cart();
        let a = product("A", "45.00");
        let b = product("B", "32.50");

        cart.add_product(&a);
        cart.add_product(&b);
        cart.add_product(&b);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), BigDecimal::from_str("110.00").unwrap());
    }

    #[test]
    fn should_reject_quantity_below_one() {
        let mut cart = cart();
        let serum = product("Sérum", "45.00");
        cart.add_product(&serum);

        let result = cart.set_quantity(serum.id, 0);

        assert!(matches!(result.unwrap_err(), CartError::QuantityInvalid));
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn should_reject_quantity_for_unknown_product() {
        let mut cart = cart();

        let result = cart.set_quantity(Uuid::new_v4(), 2);

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[test]
    fn should_set_quantity_directly() {
        let mut cart = cart();
        let serum = product("Sérum", "45.00");
        cart.add_product(&serum);

        cart.set_quantity(serum.id, 5).unwrap();

        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn should_remove_line_unconditionally() {
        let mut cart = cart();
        let serum = product("Sérum", "45.00");
        cart.add_product(&serum);
        cart.add_product(&serum);

        cart.remove_item(serum.id);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_ignore_removal_of_absent_line() {
        let mut cart = cart();
        let serum = product("Sérum", "45.00");
        cart.add_product(&serum);

        cart.remove_item(Uuid::new_v4());

        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn should_clear_all_lines() {
        let mut cart = cart();
        cart.add_product(&product("A", "45.00"));
        cart.add_product(&product("B", "32.50"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), BigDecimal::zero());
    }

    proptest! {
        // Totals must always equal the sum over the current line list,
        // whatever sequence of operations produced it.
        #[test]
        fn totals_are_consistent_with_line_items(ops in prop::collection::vec((0usize..4, 1u32..6), 0..40)) {
            let products: Vec<Product> = (0..4)
                .map(|i| product(&format!("P{}", i), &format!("{}.50", i + 1)))
                .collect();
            let mut cart = Cart::empty(SessionId::new("prop-session"));

            for (idx, qty) in ops {
                match qty % 3 {
                    0 => cart.add_product(&products[idx]),
                    1 => {
                        let _ = cart.set_quantity(products[idx].id, qty);
                    }
                    _ => cart.remove_item(products[idx].id),
                }
            }

            let expected_items: u32 = cart.items.iter().map(|i| i.quantity).sum();
            let expected_price = cart
                .items
                .iter()
                .fold(BigDecimal::zero(), |acc, i| acc + i.subtotal());

            prop_assert_eq!(cart.total_items(), expected_items);
            prop_assert_eq!(cart.total_price(), expected_price);

            // One line per distinct product id.
            let mut ids: Vec<Uuid> = cart.items.iter().map(|i| i.product_id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), cart.items.len());
        }
    }
}
