pub mod add_product;
pub mod home;
mod not_found;

pub use add_product::AddProduct;
pub use home::Home;
pub use not_found::NotFound;
