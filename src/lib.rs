//! A small product catalog manager.
//!
//! The UI lists products, filters them by name and category, edits prices inline, deletes
//! products and adds new ones (creating their category on the fly). Every change goes straight
//! to the catalog HTTP API; nothing is stored locally.

pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod router;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Install the logger and start the app on the platform picked by the enabled feature.
pub fn launch() {
    let config = AppConfig::from_build_env();

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("failed to install the logger: {err}");
    }

    tracing::info!(api_url = %config.api_url, "launching catalog");

    LaunchBuilder::new().with_context(config).launch(App);
}

/// The root component: provides the API client and mounts the router.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| ApiClient::new(config.api_url));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
