use thiserror::Error;

/// Opaque identifier of the customer owning a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(String);

#[derive(Debug, Clone, Error)]
pub enum CustomerIdError {
    #[error("customer id cannot be empty")]
    Empty,
}

impl CustomerId {
    pub fn new(raw: &str) -> Result<Self, CustomerIdError> {
        if raw.trim().is_empty() {
            return Err(CustomerIdError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a product held in a wishlist.
///
/// Constructing one is the only way to get a product identifier into the
/// domain, so empty identifiers are rejected here once and for all.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(String);

#[derive(Debug, Clone, Error)]
pub enum ProductIdError {
    #[error("product id cannot be empty")]
    Empty,
}

impl ProductId {
    pub fn new(raw: &str) -> Result<Self, ProductIdError> {
        if raw.trim().is_empty() {
            return Err(ProductIdError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty list of product identifiers submitted by an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBatch(Vec<ProductId>);

#[derive(Debug, Clone, Error)]
pub enum ProductBatchError {
    #[error("products cannot be empty")]
    Empty,
    #[error(transparent)]
    Product(#[from] ProductIdError),
}

impl ProductBatch {
    pub fn new(raw: &[String]) -> Result<Self, ProductBatchError> {
        if raw.is_empty() {
            return Err(ProductBatchError::Empty);
        }
        let products = raw
            .iter()
            .map(|id| ProductId::new(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(products))
    }

    pub fn as_slice(&self) -> &[ProductId] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ProductId> {
        self.0
    }
}

impl std::fmt::Display for ProductBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
