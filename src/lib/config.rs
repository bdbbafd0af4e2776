/*!
   Module `config` loads the process configuration once at startup from the
   environment. There is no hot reload; the values are read-only for the
   lifetime of the process.
*/

use std::env;

use anyhow::Context;

use crate::outbound::params::ConnectionParams;

const DEFAULT_SERVER_PORT: &str = "8080";
const DEFAULT_MAX_PRODUCTS: usize = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: String,
    pub max_products: usize,
    pub database: ConnectionParams,
}

impl AppConfig {
    /// Reads the configuration from the environment. Unset variables fall
    /// back to local-development defaults; a malformed or non-positive
    /// `WISHLIST_MAX_PRODUCTS` is a startup error.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string()),
            max_products: parse_max_products(env::var("WISHLIST_MAX_PRODUCTS").ok())?,
            database: ConnectionParams::from_env(),
        })
    }
}

fn parse_max_products(raw: Option<String>) -> anyhow::Result<usize> {
    let max_products = match raw {
        Some(raw) => raw
            .parse::<usize>()
            .context("WISHLIST_MAX_PRODUCTS must be a positive integer")?,
        None => DEFAULT_MAX_PRODUCTS,
    };
    if max_products == 0 {
        anyhow::bail!("WISHLIST_MAX_PRODUCTS must be a positive integer");
    }
    Ok(max_products)
}
