use std::collections::BTreeSet;

use derive_more::From;
use thiserror::Error;

use super::value_objects::{CustomerId, ProductId};

/// Per-customer wishlist aggregate: a customer identity plus a deduplicated
/// set of product identifiers.
///
/// The product set never leaves the aggregate by mutable reference; callers
/// mutate through [add_products](Wishlist::add_products) and
/// [remove_product](Wishlist::remove_product) and read through copied views.
/// Capacity is a service-level policy, not enforced here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wishlist {
    customer_id: CustomerId,
    products: BTreeSet<ProductId>,
}

impl Wishlist {
    /// Constructs a wishlist whose product set is the deduplicated union of
    /// `initial_products`.
    pub fn new(
        customer_id: CustomerId,
        initial_products: impl IntoIterator<Item = ProductId>,
    ) -> Self {
        Self {
            customer_id,
            products: initial_products.into_iter().collect(),
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Adds each identifier to the set. Identifiers already present are
    /// left alone; an empty slice is a no-op.
    pub fn add_products(&mut self, products: &[ProductId]) {
        self.products.extend(products.iter().cloned());
    }

    /// Removes the identifier if present. Returns whether anything was
    /// removed; removing a non-member is not an error.
    pub fn remove_product(&mut self, product_id: &ProductId) -> bool {
        self.products.remove(product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains(product_id)
    }

    /// Copied, sorted view of the product set.
    pub fn products(&self) -> Vec<ProductId> {
        self.products.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The request to add products to a customer's wishlist, creating the
/// wishlist if the customer does not have one yet.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct AddProductsRequest {
    customer_id: CustomerId,
    products: Vec<ProductId>,
}

impl AddProductsRequest {
    pub fn new(customer_id: CustomerId, products: Vec<ProductId>) -> Self {
        Self {
            customer_id,
            products,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }
}

#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("wishlist not found for customer id: {customer_id}")]
    NotFound { customer_id: String },
    #[error("cannot add more than {max_products} products to the wishlist")]
    MaxSizeExceeded { max_products: usize },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
    // to be extended as new error scenarios are introduced
}
