/*
   Module `remove_product` specifies an HTTP handler for removing a single
   product from a customer's [Wishlist].
*/

use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, StatusCode};

use crate::domain::wishlist::models::value_objects::ProductId;
use crate::domain::wishlist::ports::WishlistService;
use crate::inbound::http::handlers::add_products::{
    require_customer_id, ApiError, ApiSuccess, WishlistResponseData,
};
use crate::inbound::http::AppState;

/// Remove a product from a customer's [Wishlist].
///
/// Removing a product that is not in the wishlist is not an error; the
/// unchanged wishlist is returned.
///
/// # Responses
///
/// - 200 OK: the product is no longer in the wishlist.
/// - 404 Not Found: the customer has no wishlist.
pub async fn remove_product<WS: WishlistService>(
    State(state): State<AppState<WS>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<ApiSuccess<WishlistResponseData>, ApiError> {
    let path = uri.path().to_string();
    let customer_id = require_customer_id(&headers, &path)?;
    let product_id = ProductId::new(&product_id)
        .map_err(|e| ApiError::validation(format!("productId: {}", e), &path))?;

    state
        .wishlist_service
        .remove_product(&customer_id, &product_id)
        .await
        .map_err(|e| ApiError::from_domain(e, &path))
        .map(|ref wishlist| ApiSuccess::new(StatusCode::OK, wishlist.into()))
}
