use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{AddProduct, Home, NotFound};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/add-product")]
        AddProduct {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
