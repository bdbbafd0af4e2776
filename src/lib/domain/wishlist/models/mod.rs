pub mod value_objects;
pub mod wishlist;
