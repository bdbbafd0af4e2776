pub mod add_products;
pub mod get_all_products;
pub mod has_product;
pub mod remove_product;
