/*
   Module `repository` implements the [WishlistRepository] port over a
   Postgres JSONB document table: one row per customer, holding the full
   product set as a single document. Saves are last-writer-wins upserts.
*/

use sqlx::types::Json;

use crate::domain::wishlist::models::value_objects::{CustomerId, ProductId};
use crate::domain::wishlist::models::wishlist::{Wishlist, WishlistError};
use crate::domain::wishlist::ports::WishlistRepository;
use crate::outbound::connect::PostgresClient;

impl WishlistRepository for PostgresClient {
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Option<Wishlist>, WishlistError> {
        let document: Option<Json<Vec<String>>> =
            sqlx::query_scalar("SELECT products FROM wishlists WHERE customer_id = $1")
                .bind(customer_id.as_str())
                .fetch_optional(self.pool())
                .await
                .map_err(|e| WishlistError::Unknown(anyhow::anyhow!(e)))?;

        let Some(Json(products)) = document else {
            return Ok(None);
        };

        // Stored identifiers were validated on the way in; a failure here
        // means the document was corrupted outside this application.
        let products = products
            .iter()
            .map(|id| ProductId::new(id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| WishlistError::Unknown(anyhow::anyhow!(e)))?;

        Ok(Some(Wishlist::new(customer_id.clone(), products)))
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<Wishlist, WishlistError> {
        let products: Vec<String> = wishlist
            .products()
            .into_iter()
            .map(|product| product.into_inner())
            .collect();

        sqlx::query(
            r#"
            INSERT INTO wishlists (customer_id, products)
            VALUES ($1, $2)
            ON CONFLICT (customer_id) DO UPDATE SET products = EXCLUDED.products
            "#,
        )
        .bind(wishlist.customer_id().as_str())
        .bind(Json(products))
        .execute(self.pool())
        .await
        .map_err(|e| WishlistError::Unknown(anyhow::anyhow!(e)))?;

        Ok(wishlist.clone())
    }
}
