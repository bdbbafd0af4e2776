/*
   Module `ports` specifies the API by which external modules interact with the domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::wishlist::models::value_objects::{CustomerId, ProductId};
use crate::domain::wishlist::models::wishlist::{AddProductsRequest, Wishlist, WishlistError};

/// `WishlistService` is the public API for the wishlist domain.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait WishlistService: Clone + Send + Sync + 'static {
    /// Add the products in `req` to the customer's wishlist, creating the
    /// wishlist if the customer does not have one yet.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::MaxSizeExceeded] if the net-new products would push
    ///   the wishlist past the configured maximum.
    fn add_products(
        &self,
        req: &AddProductsRequest,
    ) -> impl Future<Output = Result<Wishlist, WishlistError>> + Send;

    /// Remove a product from the customer's wishlist. Removing a product
    /// that is not in the wishlist is a no-op returning the unchanged
    /// wishlist.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    fn remove_product(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<Wishlist, WishlistError>> + Send;

    /// Check whether a product is in the customer's wishlist.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    fn has_product(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> impl Future<Output = Result<bool, WishlistError>> + Send;

    /// Return the customer's wishlist with its full product set.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    fn get_all_products_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> impl Future<Output = Result<Wishlist, WishlistError>> + Send;
}

/// `WishlistRepository` represents a store of wishlist documents keyed by
/// customer id.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait WishlistRepository: Send + Sync + Clone + 'static {
    /// Look up the wishlist persisted for `customer_id`, if any.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::Unknown] for storage failures.
    fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> impl Future<Output = Result<Option<Wishlist>, WishlistError>> + Send;

    /// Persist `wishlist` keyed by its customer id, overwriting any previous
    /// state (last-writer-wins). MUST round-trip the customer id and the
    /// full product set exactly.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::Unknown] for storage failures.
    fn save(
        &self,
        wishlist: &Wishlist,
    ) -> impl Future<Output = Result<Wishlist, WishlistError>> + Send;
}
