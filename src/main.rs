//! Run with:
//!
//! ```sh
//! CATALOG_API_URL=http://localhost:3000/api dx serve --platform web
//! ```

fn main() {
    catalog_ui::launch();
}
