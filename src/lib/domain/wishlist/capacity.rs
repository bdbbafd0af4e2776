/*
   Module `capacity` holds the wishlist size policy. The check is a pure
   function of the current size and the incoming net-new count so it can be
   applied before any mutation or save call.
*/

use crate::domain::wishlist::models::wishlist::WishlistError;

/// Fails with [WishlistError::MaxSizeExceeded] when adding `incoming_new`
/// products to a wishlist of `current_size` would exceed `max_products`.
///
/// `incoming_new` must be the count of distinct incoming products that are
/// not already in the target wishlist; re-adding an existing product never
/// counts against the limit.
pub fn ensure_within_limit(
    current_size: usize,
    incoming_new: usize,
    max_products: usize,
) -> Result<(), WishlistError> {
    if current_size + incoming_new > max_products {
        return Err(WishlistError::MaxSizeExceeded { max_products });
    }
    Ok(())
}
