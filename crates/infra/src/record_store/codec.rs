//! Line formats of the customer and product records.
//!
//! - customer: `<name>`
//! - product: `<name> <base_price> <category> [<warranty_period> | <size> | <expiration_date>]`
//!
//! Plain products are written without a category token (`<name> <base_price>`);
//! an explicit `Product` token is still read. The persisted price is the base
//! price; category adjustments are reapplied on read.

use tillbook_parties::Customer;
use tillbook_products::{Category, Product, ProductKind, UnknownCategory};

use super::r#trait::{Record, RecordError};

impl Record for Customer {
    const KIND: &'static str = "customer";

    fn to_fields(&self) -> Vec<String> {
        vec![self.name().to_string()]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        match fields {
            [name] => Ok(Customer::new(*name)?),
            _ => Err(RecordError::malformed(format!(
                "customer record expects 1 field, found {}",
                fields.len()
            ))),
        }
    }

    fn fallback() -> Self {
        Customer::fallback()
    }
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn to_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name().to_string(), self.base_price().to_string()];
        let extra = match self.kind() {
            ProductKind::Base => return fields,
            ProductKind::Electronics { warranty_period } => warranty_period.to_string(),
            ProductKind::Clothing { size } => size.clone(),
            ProductKind::Groceries { expiration_date } => expiration_date.clone(),
        };
        fields.push(self.category().as_str().to_string());
        fields.push(extra);
        fields
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let [name, price, rest @ ..] = fields else {
            return Err(RecordError::malformed(
                "product record expects at least a name and a price",
            ));
        };
        let base_price: f64 = price
            .parse()
            .map_err(|_| RecordError::malformed(format!("invalid price {price:?}")))?;

        let kind = match rest {
            [] => ProductKind::Base,
            [category, extra @ ..] => {
                let category: Category = category
                    .parse()
                    .map_err(|UnknownCategory(token)| RecordError::UnknownCategory(token))?;
                decode_kind(category, extra)?
            }
        };

        Ok(Product::new(*name, base_price, kind)?)
    }

    fn fallback() -> Self {
        Product::fallback()
    }
}

fn decode_kind(category: Category, extra: &[&str]) -> Result<ProductKind, RecordError> {
    let kind = match (category, extra) {
        (Category::Product, []) => ProductKind::Base,
        (Category::Electronics, [warranty]) => ProductKind::Electronics {
            warranty_period: warranty.parse().map_err(|_| {
                RecordError::malformed(format!("invalid warranty period {warranty:?}"))
            })?,
        },
        (Category::Clothing, [size]) => ProductKind::Clothing {
            size: size.to_string(),
        },
        (Category::Groceries, [expiration_date]) => ProductKind::Groceries {
            expiration_date: expiration_date.to_string(),
        },
        (category, _) => {
            let expected = if category == Category::Product { 0 } else { 1 };
            return Err(RecordError::malformed(format!(
                "{category} record expects {expected} field(s) after the category, found {}",
                extra.len()
            )));
        }
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(line: &str) -> Result<Product, RecordError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        Product::from_fields(&fields)
    }

    #[test]
    fn product_lines_carry_base_price_and_category() {
        let laptop = Product::electronics("Laptop", 1000.0, 12).unwrap();
        assert_eq!(laptop.encode(), "Laptop 1000 Electronics 12");

        let shirt = Product::clothing("Shirt", 19.99, "XL").unwrap();
        assert_eq!(shirt.encode(), "Shirt 19.99 Clothing XL");

        let milk = Product::groceries("Milk", 3.0, "2024-01-01").unwrap();
        assert_eq!(milk.encode(), "Milk 3 Groceries 2024-01-01");

        assert_eq!(Product::base("Pen", 2.5).unwrap().encode(), "Pen 2.5");
        assert_eq!(Product::fallback().encode(), "DefaultProduct 0");
    }

    #[test]
    fn decodes_each_category() {
        assert_eq!(
            decode("Laptop 1000 Electronics 12").unwrap(),
            Product::electronics("Laptop", 1000.0, 12).unwrap()
        );
        assert_eq!(
            decode("Shirt 20 Clothing M").unwrap(),
            Product::clothing("Shirt", 20.0, "M").unwrap()
        );
        assert_eq!(
            decode("Milk 3 Groceries 2024-01-01").unwrap(),
            Product::groceries("Milk", 3.0, "2024-01-01").unwrap()
        );
        assert_eq!(
            decode("Pen 2.5 Product").unwrap(),
            Product::base("Pen", 2.5).unwrap()
        );
    }

    #[test]
    fn plain_product_round_trips_without_category_token() {
        let pen = Product::base("Pen", 2.5).unwrap();
        let fields = pen.to_fields();
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        assert_eq!(fields, vec!["Pen", "2.5"]);
        assert_eq!(Product::from_fields(&fields).unwrap(), pen);
    }

    #[test]
    fn line_without_category_is_a_plain_product() {
        assert_eq!(
            decode("DefaultProduct 0").unwrap(),
            Product::fallback()
        );
    }

    #[test]
    fn unknown_category_is_reported_with_its_token() {
        assert_eq!(
            decode("Robot 99 Toys 3").unwrap_err(),
            RecordError::UnknownCategory("Toys".to_string())
        );
    }

    #[test]
    fn malformed_product_lines_are_rejected() {
        assert!(matches!(decode("Lonely"), Err(RecordError::Malformed(_))));
        assert!(matches!(decode("Laptop cheap Electronics 12"), Err(RecordError::Malformed(_))));
        assert!(matches!(decode("Laptop 1000 Electronics twelve"), Err(RecordError::Malformed(_))));
        assert!(matches!(decode("Shirt 20 Clothing"), Err(RecordError::Malformed(_))));
        assert!(matches!(decode("Shirt 20 Clothing M extra"), Err(RecordError::Malformed(_))));
        assert!(matches!(decode("Pen 2 Product blue"), Err(RecordError::Malformed(_))));
    }

    #[test]
    fn customer_lines_are_just_the_name() {
        let alice = Customer::new("Alice").unwrap();
        assert_eq!(alice.encode(), "Alice");
        assert_eq!(Customer::from_fields(&["Alice"]).unwrap(), alice);
        assert!(matches!(
            Customer::from_fields(&["Alice", "Smith"]),
            Err(RecordError::Malformed(_))
        ));
    }
}
