/*!
   Module `service` provides the canonical implementation of the [WishlistService] port. All
   wishlist-domain logic is defined here.
*/

use std::collections::BTreeSet;

use crate::domain::wishlist::capacity::ensure_within_limit;
use crate::domain::wishlist::models::value_objects::{CustomerId, ProductId};
use crate::domain::wishlist::models::wishlist::{AddProductsRequest, Wishlist, WishlistError};
use crate::domain::wishlist::ports::{WishlistRepository, WishlistService};

/// Canonical implementation of the [WishlistService] port, through which the wishlist domain
/// API is consumed.
#[derive(Debug, Clone)]
pub struct Service<R>
where
    R: WishlistRepository,
{
    repo: R,
    max_products: usize,
}

impl<R> Service<R>
where
    R: WishlistRepository,
{
    /// `max_products` is the process-wide size limit, passed in explicitly
    /// so tests can run isolated services in parallel.
    pub fn new(repo: R, max_products: usize) -> Self {
        Self { repo, max_products }
    }
}

impl<R> WishlistService for Service<R>
where
    R: WishlistRepository,
{
    /// Add the products in `req`, creating the wishlist on first add for a
    /// customer. The capacity check runs against the distinct net-new
    /// product count before any mutation or save, so a rejected call leaves
    /// nothing persisted.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::MaxSizeExceeded] if the net-new products would push
    ///   the wishlist past the configured maximum.
    async fn add_products(&self, req: &AddProductsRequest) -> Result<Wishlist, WishlistError> {
        tracing::info!(
            customer_id = %req.customer_id(),
            products = req.products().len(),
            "adding products to wishlist"
        );

        let wishlist = match self.repo.find_by_customer_id(req.customer_id()).await? {
            Some(mut wishlist) => {
                // Only distinct products not already present count against
                // the limit; a client retrying an overlapping add is not
                // penalized.
                let net_new: BTreeSet<&ProductId> = req
                    .products()
                    .iter()
                    .filter(|&product| !wishlist.contains(product))
                    .collect();
                ensure_within_limit(wishlist.len(), net_new.len(), self.max_products)?;

                let net_new: Vec<ProductId> = net_new.into_iter().cloned().collect();
                wishlist.add_products(&net_new);
                wishlist
            }
            None => {
                tracing::info!(
                    customer_id = %req.customer_id(),
                    "creating new wishlist for customer"
                );
                let distinct: BTreeSet<ProductId> = req.products().iter().cloned().collect();
                ensure_within_limit(0, distinct.len(), self.max_products)?;
                Wishlist::new(req.customer_id().clone(), distinct)
            }
        };

        self.repo.save(&wishlist).await
    }

    /// Remove a product from the customer's wishlist. A non-member product
    /// is a no-op: the unchanged wishlist is returned without a save call.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    async fn remove_product(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<Wishlist, WishlistError> {
        tracing::info!(
            customer_id = %customer_id,
            product_id = %product_id,
            "removing product from wishlist"
        );

        let Some(mut wishlist) = self.repo.find_by_customer_id(customer_id).await? else {
            return Err(WishlistError::NotFound {
                customer_id: customer_id.to_string(),
            });
        };

        if wishlist.remove_product(product_id) {
            self.repo.save(&wishlist).await
        } else {
            tracing::info!(
                customer_id = %customer_id,
                product_id = %product_id,
                "product was not in wishlist"
            );
            Ok(wishlist)
        }
    }

    /// Check whether a product is in the customer's wishlist. No mutation.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    async fn has_product(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> Result<bool, WishlistError> {
        tracing::info!(
            customer_id = %customer_id,
            product_id = %product_id,
            "checking product membership in wishlist"
        );

        let Some(wishlist) = self.repo.find_by_customer_id(customer_id).await? else {
            return Err(WishlistError::NotFound {
                customer_id: customer_id.to_string(),
            });
        };

        Ok(wishlist.contains(product_id))
    }

    /// Return the customer's wishlist with its full product set.
    ///
    /// # Errors:
    ///
    /// - [WishlistError::NotFound] if the customer has no wishlist.
    async fn get_all_products_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Wishlist, WishlistError> {
        tracing::info!(customer_id = %customer_id, "retrieving all products for customer");

        self.repo
            .find_by_customer_id(customer_id)
            .await?
            .ok_or_else(|| WishlistError::NotFound {
                customer_id: customer_id.to_string(),
            })
    }
}
