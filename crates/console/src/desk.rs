//! Front-desk service: the entry points the console calls into.

use thiserror::Error;
use tracing::info;

use tillbook_core::DomainError;
use tillbook_infra::{Lookup, RecordStore, RecordStoreError};
use tillbook_invoicing::Invoice;
use tillbook_parties::Customer;
use tillbook_products::Product;

/// Desk operation error.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Whether a record was already stored or has just been saved.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration<T> {
    Existing(T),
    Created(T),
}

impl<T> Registration<T> {
    pub fn into_inner(self) -> T {
        match self {
            Registration::Existing(v) | Registration::Created(v) => v,
        }
    }
}

/// Invoice desk over a customer store and a product store.
///
/// Invoices themselves are never stored; only the customers and products
/// they reference are.
#[derive(Debug)]
pub struct Desk<C, P> {
    customers: C,
    products: P,
}

impl<C, P> Desk<C, P>
where
    C: RecordStore<Customer>,
    P: RecordStore<Product>,
{
    pub fn new(customers: C, products: P) -> Self {
        Self {
            customers,
            products,
        }
    }

    /// Load the customer named `name`, or create and save it.
    pub fn register_customer(&self, name: &str) -> Result<Registration<Customer>, DeskError> {
        let customer = Customer::new(name)?;
        if let Some(existing) = self.customers.load(customer.name())? {
            return Ok(Registration::Existing(existing));
        }

        self.customers.save(&customer)?;
        info!(customer = customer.name(), "customer registered");
        Ok(Registration::Created(customer))
    }

    /// Start an invoice for `customer_name`, registering the customer first
    /// when it is not stored yet.
    pub fn open_invoice(&self, customer_name: &str) -> Result<Invoice, DeskError> {
        let customer = self.register_customer(customer_name)?.into_inner();
        info!(customer = customer.name(), "invoice opened");
        Ok(Invoice::new(customer))
    }

    /// Stored product named `name`, or the placeholder product.
    pub fn find_product(&self, name: &str) -> Result<Lookup<Product>, DeskError> {
        Ok(self.products.load_or_default(name)?)
    }

    /// Save a newly described product.
    pub fn register_product(&self, product: &Product) -> Result<(), DeskError> {
        self.products.save(product)?;
        info!(product = product.name(), category = %product.category(), "product registered");
        Ok(())
    }

    pub fn add_product(&self, invoice: &mut Invoice, product: Product) {
        invoice.add_product(product);
    }

    pub fn total(&self, invoice: &Invoice) -> f64 {
        invoice.total()
    }

    /// Products of `invoice` in the order they were added, for display.
    pub fn list_products<'a>(&self, invoice: &'a Invoice) -> &'a [Product] {
        invoice.products()
    }

    pub fn customers(&self) -> Result<Vec<Customer>, DeskError> {
        Ok(self.customers.records()?)
    }

    pub fn products(&self) -> Result<Vec<Product>, DeskError> {
        Ok(self.products.records()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillbook_infra::{FlatFileStore, InMemoryRecordStore, StoreConfig};

    fn in_memory_desk() -> Desk<InMemoryRecordStore<Customer>, InMemoryRecordStore<Product>> {
        Desk::new(InMemoryRecordStore::new(), InMemoryRecordStore::new())
    }

    #[test]
    fn invoice_for_new_customer_totals_clothing_and_groceries() {
        let desk = in_memory_desk();

        let mut invoice = desk.open_invoice("Alice").unwrap();
        desk.add_product(&mut invoice, Product::clothing("Shirt", 20.0, "M").unwrap());
        desk.add_product(
            &mut invoice,
            Product::groceries("Milk", 3.0, "2024-01-01").unwrap(),
        );

        assert_eq!(invoice.customer().name(), "Alice");
        assert!((desk.total(&invoice) - 27.7).abs() < 1e-9);

        let names: Vec<&str> = desk.list_products(&invoice).iter().map(Product::name).collect();
        assert_eq!(names, vec!["Shirt", "Milk"]);
    }

    #[test]
    fn opening_an_invoice_saves_the_entered_customer_once() {
        let desk = in_memory_desk();

        desk.open_invoice("Alice").unwrap();
        desk.open_invoice("Alice").unwrap();

        let customers = desk.customers().unwrap();
        assert_eq!(customers, vec![Customer::new("Alice").unwrap()]);
    }

    #[test]
    fn register_customer_reports_existing_records() {
        let desk = in_memory_desk();

        assert!(matches!(
            desk.register_customer("Bob").unwrap(),
            Registration::Created(_)
        ));
        assert!(matches!(
            desk.register_customer("Bob").unwrap(),
            Registration::Existing(_)
        ));
    }

    #[test]
    fn invalid_customer_name_is_rejected_before_touching_the_store() {
        let desk = in_memory_desk();

        assert!(matches!(
            desk.open_invoice("Alice Smith"),
            Err(DeskError::Domain(DomainError::Validation(_)))
        ));
        assert!(desk.customers().unwrap().is_empty());
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let desk = in_memory_desk();
        let invoice = desk.open_invoice("Carol").unwrap();
        assert_eq!(desk.total(&invoice), 0.0);
        assert!(desk.list_products(&invoice).is_empty());
    }

    #[test]
    fn registered_products_are_found_again_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        let desk = Desk::new(
            FlatFileStore::customers(&config),
            FlatFileStore::products(&config),
        );

        assert!(!desk.find_product("Laptop").unwrap().is_found());

        desk.register_product(&Product::electronics("Laptop", 1000.0, 12).unwrap())
            .unwrap();

        // A fresh desk over the same files sees the saved product.
        let reopened = Desk::new(
            FlatFileStore::customers(&config),
            FlatFileStore::products(&config),
        );
        let laptop = reopened.find_product("Laptop").unwrap().found().unwrap();
        let mut invoice = reopened.open_invoice("Alice").unwrap();
        reopened.add_product(&mut invoice, laptop);

        assert!((reopened.total(&invoice) - 1001.2).abs() < 1e-9);
        assert_eq!(reopened.products().unwrap().len(), 1);
    }
}
