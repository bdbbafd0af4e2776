/*!
   Hexagonal customer-wishlist service.

   `domain` holds the wishlist aggregate and its ports, `inbound` the HTTP
   adapter, `outbound` the persistence adapters. `config` loads the process
   configuration once at startup.
*/

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
