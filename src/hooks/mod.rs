mod use_categories;

pub use use_categories::*;
