//! Pharmacy storefront data and cart.
//!
//! The formulary is static read-only reference data; the cart is a pure
//! in-memory map keyed by drug id, owned by one session. No payment or
//! fulfilment here.

use crate::error::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One storefront item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Unit price in Namibian dollars.
    pub price: f64,
    pub in_stock: bool,
}

/// Read-only drug list.
#[derive(Clone, Debug)]
pub struct Formulary {
    drugs: Vec<Drug>,
}

impl Formulary {
    /// The built-in storefront list.
    pub fn builtin() -> Self {
        let drug = |id, name: &str, description: &str, price, in_stock| Drug {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            in_stock,
        };

        Self {
            drugs: vec![
                drug(1, "Paracetamol", "Pain and fever relief, 500mg tablets", 1.99, true),
                drug(2, "Ibuprofen", "Anti-inflammatory, 200mg tablets", 8.75, false),
                drug(3, "Amoxicillin", "Broad-spectrum antibiotic, 250mg capsules", 25.0, true),
                drug(4, "Cetirizine", "Antihistamine for allergy relief, 10mg tablets", 15.2, false),
            ],
        }
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    pub fn find(&self, id: u32) -> Option<&Drug> {
        self.drugs.iter().find(|drug| drug.id == id)
    }
}

/// One line in a cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub drug: Drug,
    pub quantity: u32,
}

/// A session's shopping cart, keyed by drug id.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: BTreeMap<u32, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a formulary drug.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::UnknownDrug` if the id is not in the formulary.
    pub fn add(&mut self, formulary: &Formulary, drug_id: u32) -> TriageResult<()> {
        let drug = formulary
            .find(drug_id)
            .ok_or_else(|| TriageError::UnknownDrug(drug_id.to_string()))?;

        self.lines
            .entry(drug_id)
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| CartLine {
                drug: drug.clone(),
                quantity: 1,
            });
        Ok(())
    }

    /// Remove one unit; the line disappears when its quantity reaches zero.
    pub fn remove(&mut self, drug_id: u32) {
        if let Some(line) = self.lines.get_mut(&drug_id) {
            line.quantity -= 1;
            if line.quantity == 0 {
                self.lines.remove(&drug_id);
            }
        }
    }

    /// Lines in drug-id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Total unit count across all lines.
    pub fn unit_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cart total.
    pub fn total(&self) -> f64 {
        self.lines
            .values()
            .map(|line| line.drug.price * f64::from(line.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_known_drugs_accumulates_quantity() {
        let formulary = Formulary::builtin();
        let mut cart = Cart::new();
        cart.add(&formulary, 1).expect("add");
        cart.add(&formulary, 1).expect("add");
        cart.add(&formulary, 3).expect("add");

        assert_eq!(cart.unit_count(), 3);
        let quantities: Vec<(u32, u32)> = cart
            .lines()
            .map(|line| (line.drug.id, line.quantity))
            .collect();
        assert_eq!(quantities, vec![(1, 2), (3, 1)]);
    }

    #[test]
    fn unknown_drug_is_rejected() {
        let formulary = Formulary::builtin();
        let mut cart = Cart::new();
        let err = cart.add(&formulary, 99).expect_err("unknown drug");
        assert!(matches!(err, TriageError::UnknownDrug(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let formulary = Formulary::builtin();
        let mut cart = Cart::new();
        cart.add(&formulary, 1).expect("add"); // 1.99
        cart.add(&formulary, 1).expect("add"); // 1.99
        cart.add(&formulary, 4).expect("add"); // 15.2

        assert!((cart.total() - 19.18).abs() < 1e-9);
    }

    #[test]
    fn removing_drops_the_line_at_zero() {
        let formulary = Formulary::builtin();
        let mut cart = Cart::new();
        cart.add(&formulary, 2).expect("add");
        cart.add(&formulary, 2).expect("add");

        cart.remove(2);
        assert_eq!(cart.unit_count(), 1);
        cart.remove(2);
        assert!(cart.is_empty());
        // Removing from an empty cart is a no-op.
        cart.remove(2);
    }
}
