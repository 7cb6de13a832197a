//! Numbered text menu over a [`Desk`].
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any
//! `Write`, so the whole loop can be driven from memory in tests. End of input
//! ends the session.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};

use tillbook_infra::RecordStore;
use tillbook_invoicing::Invoice;
use tillbook_parties::Customer;
use tillbook_products::{Category, Product, ProductKind};

use crate::desk::{Desk, Registration};

const MAIN_MENU: &str = "1. Create Invoice\n2. Manage Customers\n3. Handle Products\n4. Exit";

pub struct Menu<C, P, R, W> {
    desk: Desk<C, P>,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<C, P, R, W> Menu<C, P, R, W>
where
    C: RecordStore<Customer>,
    P: RecordStore<Product>,
    R: BufRead,
    W: Write,
{
    pub fn new(desk: Desk<C, P>, input: R, output: W) -> Self {
        Self {
            desk,
            input,
            output,
            today: Local::now().date_naive(),
        }
    }

    /// Date used to flag expired groceries.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.create_invoice()?,
                "2" => self.manage_customers()?,
                "3" => self.handle_products()?,
                "4" => {
                    writeln!(self.output, "Exiting program.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
        self.output.flush()
    }

    fn create_invoice(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter customer name: ")? else {
            return Ok(());
        };
        let mut invoice = match self.desk.open_invoice(&name) {
            Ok(invoice) => invoice,
            Err(e) => return writeln!(self.output, "Error: {e}"),
        };
        writeln!(
            self.output,
            "Invoice created for customer: {}",
            invoice.customer().name()
        )?;

        while let Some(name) = self.prompt("Enter product name (blank to finish): ")? {
            if name.is_empty() {
                break;
            }
            self.add_product_to_invoice(&mut invoice, &name)?;
        }

        self.display_invoice(&invoice)
    }

    fn add_product_to_invoice(&mut self, invoice: &mut Invoice, name: &str) -> io::Result<()> {
        let lookup = match self.desk.find_product(name) {
            Ok(lookup) => lookup,
            Err(e) => return writeln!(self.output, "Error: {e}"),
        };
        let product = match lookup.found() {
            Some(product) => product,
            None => {
                writeln!(self.output, "New product: {name}")?;
                let Some(product) = self.read_product_details(name)? else {
                    return Ok(());
                };
                if let Err(e) = self.desk.register_product(&product) {
                    writeln!(self.output, "Error: {e}")?;
                }
                product
            }
        };

        if product.is_expired_on(self.today) {
            writeln!(
                self.output,
                "Warning: {} is past its expiration date.",
                product.name()
            )?;
        }
        writeln!(
            self.output,
            "Product added to the invoice: {}",
            product.name()
        )?;
        self.desk.add_product(invoice, product);
        Ok(())
    }

    fn display_invoice(&mut self, invoice: &Invoice) -> io::Result<()> {
        writeln!(self.output, "Invoice Details")?;
        writeln!(self.output, "Customer: {}", invoice.customer().name())?;
        writeln!(self.output, "Products:")?;
        if invoice.is_empty() {
            writeln!(self.output, "(none)")?;
        }
        for product in self.desk.list_products(invoice) {
            writeln!(self.output, "{}", product.describe())?;
        }
        writeln!(self.output, "Total: {}", self.desk.total(invoice))
    }

    fn manage_customers(&mut self) -> io::Result<()> {
        match self.desk.customers() {
            Ok(customers) => {
                writeln!(self.output, "Customers:")?;
                for customer in customers {
                    writeln!(self.output, "{customer}")?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }

        let Some(name) = self.prompt("Enter new customer name (blank to skip): ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return Ok(());
        }
        match self.desk.register_customer(&name) {
            Ok(Registration::Created(c)) => writeln!(self.output, "Customer saved: {c}"),
            Ok(Registration::Existing(c)) => writeln!(self.output, "Customer already exists: {c}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn handle_products(&mut self) -> io::Result<()> {
        match self.desk.products() {
            Ok(products) => {
                writeln!(self.output, "Products:")?;
                for product in products {
                    writeln!(self.output, "{product}")?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }

        let Some(name) = self.prompt("Enter new product name (blank to skip): ")? else {
            return Ok(());
        };
        if name.is_empty() {
            return Ok(());
        }
        match self.desk.find_product(&name) {
            Ok(lookup) if lookup.is_found() => {
                return writeln!(self.output, "Product already exists: {}", lookup.record());
            }
            Ok(_) => {}
            Err(e) => return writeln!(self.output, "Error: {e}"),
        }

        let Some(product) = self.read_product_details(&name)? else {
            return Ok(());
        };
        match self.desk.register_product(&product) {
            Ok(()) => writeln!(self.output, "Product saved: {product}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    /// Ask for category, price and the category's own field.
    ///
    /// `None` when input ends or an answer is invalid (after saying so).
    fn read_product_details(&mut self, name: &str) -> io::Result<Option<Product>> {
        let Some(category) =
            self.prompt("Enter product category (Product/Electronics/Clothing/Groceries): ")?
        else {
            return Ok(None);
        };
        let Ok(category) = category.parse::<Category>() else {
            writeln!(self.output, "Invalid product type.")?;
            return Ok(None);
        };

        let Some(price) = self.prompt("Enter product price: ")? else {
            return Ok(None);
        };
        let Ok(price) = price.parse::<f64>() else {
            writeln!(self.output, "Invalid price.")?;
            return Ok(None);
        };

        let kind = match category {
            Category::Product => ProductKind::Base,
            Category::Electronics => {
                let Some(warranty) = self.prompt("Enter warranty period: ")? else {
                    return Ok(None);
                };
                let Ok(warranty_period) = warranty.parse::<i32>() else {
                    writeln!(self.output, "Invalid warranty period.")?;
                    return Ok(None);
                };
                ProductKind::Electronics { warranty_period }
            }
            Category::Clothing => {
                let Some(size) = self.prompt("Enter clothing size: ")? else {
                    return Ok(None);
                };
                ProductKind::Clothing { size }
            }
            Category::Groceries => {
                let Some(expiration_date) =
                    self.prompt("Enter expiration date (YYYY-MM-DD): ")?
                else {
                    return Ok(None);
                };
                ProductKind::Groceries { expiration_date }
            }
        };

        match Product::new(name, price, kind) {
            Ok(product) => Ok(Some(product)),
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                Ok(None)
            }
        }
    }

    /// Print `question` and read one trimmed answer; `None` at end of input.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
