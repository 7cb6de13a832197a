use serde::{Deserialize, Serialize};

use tillbook_core::{DomainResult, Entity, validate_record_field};

/// Name of the placeholder customer used when a lookup finds nothing.
pub const DEFAULT_CUSTOMER_NAME: &str = "DefaultCustomer";

/// A customer, identified by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_record_field("customer name", &name)?;
        Ok(Self { name })
    }

    /// Placeholder customer for callers that want one even when a lookup
    /// found nothing.
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_CUSTOMER_NAME.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
