/*
   Module `memory` provides an in-memory implementation of the
   [WishlistRepository] port: a fake over a plain map, used by tests in
   place of the document store.
*/

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::wishlist::models::value_objects::CustomerId;
use crate::domain::wishlist::models::wishlist::{Wishlist, WishlistError};
use crate::domain::wishlist::ports::WishlistRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryWishlistRepository {
    wishlists: Arc<Mutex<HashMap<String, Wishlist>>>,
}

impl InMemoryWishlistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WishlistRepository for InMemoryWishlistRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Wishlist>, WishlistError> {
        let wishlists = self
            .wishlists
            .lock()
            .map_err(|_| WishlistError::Unknown(anyhow::anyhow!("wishlist store lock poisoned")))?;
        Ok(wishlists.get(customer_id.as_str()).cloned())
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<Wishlist, WishlistError> {
        let mut wishlists = self
            .wishlists
            .lock()
            .map_err(|_| WishlistError::Unknown(anyhow::anyhow!("wishlist store lock poisoned")))?;
        wishlists.insert(wishlist.customer_id().as_str().to_string(), wishlist.clone());
        Ok(wishlist.clone())
    }
}
