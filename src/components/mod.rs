mod alerts;
mod category_input;
mod nav;
mod product_card;

pub use alerts::*;
pub use category_input::*;
pub use nav::*;
pub use product_card::*;
