use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tillbook_core::{DomainResult, Entity, validate_record_field};

/// Per-month warranty surcharge applied to electronics.
pub const WARRANTY_RATE: f64 = 0.1;

/// Flat surcharge applied to clothing.
pub const CLOTHING_SURCHARGE: f64 = 5.0;

/// Groceries are sold at 90% of their base price.
pub const GROCERIES_PRICE_FACTOR: f64 = 0.9;

/// Name of the placeholder product used when a lookup finds nothing.
pub const DEFAULT_PRODUCT_NAME: &str = "DefaultProduct";

const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Product category tag (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Product,
    Electronics,
    Clothing,
    Groceries,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Electronics,
        Category::Clothing,
        Category::Groceries,
    ];

    /// Token used both as the display label and as the persisted category field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Product => "Product",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Groceries => "Groceries",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category token that names none of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category-specific product data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ProductKind {
    /// Plain product, sold at its base price.
    Base,
    /// Warranty period in months.
    Electronics { warranty_period: i32 },
    Clothing { size: String },
    /// Expiration date as entered (expected `YYYY-MM-DD`, not enforced).
    Groceries { expiration_date: String },
}

impl ProductKind {
    pub fn category(&self) -> Category {
        match self {
            ProductKind::Base => Category::Product,
            ProductKind::Electronics { .. } => Category::Electronics,
            ProductKind::Clothing { .. } => Category::Clothing,
            ProductKind::Groceries { .. } => Category::Groceries,
        }
    }
}

/// A priced product.
///
/// Immutable after construction. The base price is kept as entered; every
/// category adjustment is applied on read by [`Product::effective_price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    base_price: f64,
    kind: ProductKind,
}

impl Product {
    /// Create a product of any category.
    ///
    /// Only the presence of the text fields is checked. Negative prices and
    /// warranty periods are accepted as-is.
    pub fn new(name: impl Into<String>, base_price: f64, kind: ProductKind) -> DomainResult<Self> {
        let name = name.into();
        validate_record_field("product name", &name)?;
        match &kind {
            ProductKind::Clothing { size } => validate_record_field("clothing size", size)?,
            ProductKind::Groceries { expiration_date } => {
                validate_record_field("expiration date", expiration_date)?
            }
            ProductKind::Base | ProductKind::Electronics { .. } => {}
        }

        Ok(Self {
            name,
            base_price,
            kind,
        })
    }

    pub fn base(name: impl Into<String>, base_price: f64) -> DomainResult<Self> {
        Self::new(name, base_price, ProductKind::Base)
    }

    pub fn electronics(
        name: impl Into<String>,
        base_price: f64,
        warranty_period: i32,
    ) -> DomainResult<Self> {
        Self::new(name, base_price, ProductKind::Electronics { warranty_period })
    }

    pub fn clothing(
        name: impl Into<String>,
        base_price: f64,
        size: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(name, base_price, ProductKind::Clothing { size: size.into() })
    }

    pub fn groceries(
        name: impl Into<String>,
        base_price: f64,
        expiration_date: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            base_price,
            ProductKind::Groceries {
                expiration_date: expiration_date.into(),
            },
        )
    }

    /// Zero-priced placeholder returned by callers that want a product even
    /// when a lookup found nothing.
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_PRODUCT_NAME.to_string(),
            base_price: 0.0,
            kind: ProductKind::Base,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Price after the category's adjustment rule.
    pub fn effective_price(&self) -> f64 {
        match &self.kind {
            ProductKind::Base => self.base_price,
            ProductKind::Electronics { warranty_period } => {
                self.base_price + WARRANTY_RATE * f64::from(*warranty_period)
            }
            ProductKind::Clothing { .. } => self.base_price + CLOTHING_SURCHARGE,
            ProductKind::Groceries { .. } => self.base_price * GROCERIES_PRICE_FACTOR,
        }
    }

    /// One-line description: category label, name and effective price.
    pub fn describe(&self) -> String {
        format!(
            "{}: {}, Price: {}",
            self.category(),
            self.name,
            self.effective_price()
        )
    }

    /// Parsed expiration date of a grocery item.
    ///
    /// `None` for other categories and for dates not written as `YYYY-MM-DD`.
    pub fn expires_on(&self) -> Option<NaiveDate> {
        match &self.kind {
            ProductKind::Groceries { expiration_date } => {
                NaiveDate::parse_from_str(expiration_date, EXPIRATION_DATE_FORMAT).ok()
            }
            _ => None,
        }
    }

    /// Whether a grocery item is past its expiration date on `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expires_on().is_some_and(|date| date < today)
    }
}

impl Entity for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
