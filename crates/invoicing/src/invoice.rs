use serde::{Deserialize, Serialize};

use tillbook_parties::Customer;
use tillbook_products::Product;

/// Aggregate root: Invoice.
///
/// Owns its customer and its own copies of every product added. The total is
/// recomputed from the products on every call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    customer: Customer,
    products: Vec<Product>,
}

impl Invoice {
    /// Open an invoice for `customer` with no products.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            products: Vec::new(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Append a product. Duplicates are kept as separate lines.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of the effective prices of all products (`0.0` when empty).
    pub fn total(&self) -> f64 {
        // Folding from +0.0: `f64::sum` of an empty iterator yields -0.0.
        self.products
            .iter()
            .fold(0.0, |acc, p| acc + p.effective_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::new("Alice").unwrap()
    }

    fn shirt() -> Product {
        Product::clothing("Shirt", 20.0, "M").unwrap()
    }

    fn milk() -> Product {
        Product::groceries("Milk", 3.0, "2024-01-01").unwrap()
    }

    #[test]
    fn new_invoice_is_empty_with_zero_total() {
        let invoice = Invoice::new(alice());
        assert!(invoice.is_empty());
        assert_eq!(invoice.total(), 0.0);
        assert_eq!(invoice.customer().name(), "Alice");
    }

    #[test]
    fn empty_invoice_total_is_positive_zero() {
        let total = Invoice::new(alice()).total();
        assert!(!total.is_sign_negative());
        assert_eq!(total.to_string(), "0");
    }

    #[test]
    fn total_sums_effective_prices() {
        let mut invoice = Invoice::new(alice());
        invoice.add_product(shirt());
        invoice.add_product(milk());

        assert!((invoice.total() - 27.7).abs() < 1e-9);
    }

    #[test]
    fn products_keep_insertion_order_and_duplicates() {
        let mut invoice = Invoice::new(alice());
        invoice.add_product(milk());
        invoice.add_product(shirt());
        invoice.add_product(milk());

        let names: Vec<&str> = invoice.products().iter().map(Product::name).collect();
        assert_eq!(names, vec!["Milk", "Shirt", "Milk"]);
        assert!((invoice.total() - (2.7 + 25.0 + 2.7)).abs() < 1e-9);
    }

    #[test]
    fn invoice_holds_its_own_copy_of_products() {
        let product = Product::electronics("Laptop", 1000.0, 12).unwrap();
        let mut invoice = Invoice::new(alice());
        invoice.add_product(product.clone());
        drop(product);

        assert_eq!(invoice.products()[0].name(), "Laptop");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_product() -> impl Strategy<Value = Product> {
            let name = "[A-Za-z][A-Za-z0-9_-]{0,15}";
            prop_oneof![
                (name, 0.0f64..10_000.0).prop_map(|(n, p)| Product::base(n, p).unwrap()),
                (name, 0.0f64..10_000.0, 0i32..120)
                    .prop_map(|(n, p, w)| Product::electronics(n, p, w).unwrap()),
                (name, 0.0f64..10_000.0, "(XS|S|M|L|XL)")
                    .prop_map(|(n, p, s)| Product::clothing(n, p, s).unwrap()),
                (name, 0.0f64..10_000.0)
                    .prop_map(|(n, p)| Product::groceries(n, p, "2030-01-01").unwrap()),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: total is the sum of effective prices, in any order.
            #[test]
            fn total_matches_sum_of_effective_prices(
                products in prop::collection::vec(any_product(), 0..20)
            ) {
                let mut invoice = Invoice::new(Customer::new("Alice").unwrap());
                for p in &products {
                    invoice.add_product(p.clone());
                }

                let expected = products.iter().fold(0.0, |acc, p| acc + p.effective_price());
                prop_assert_eq!(invoice.total(), expected);

                let mut reversed = Invoice::new(Customer::new("Alice").unwrap());
                for p in products.iter().rev() {
                    reversed.add_product(p.clone());
                }
                prop_assert!((reversed.total() - expected).abs() < 1e-6);
            }

            /// Property: listing returns exactly what was added, in order.
            #[test]
            fn listing_preserves_insertion_order(
                products in prop::collection::vec(any_product(), 0..20)
            ) {
                let mut invoice = Invoice::new(Customer::new("Bob").unwrap());
                for p in &products {
                    invoice.add_product(p.clone());
                }
                prop_assert_eq!(invoice.products(), products.as_slice());
            }
        }
    }
}
