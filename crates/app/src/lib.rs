use dioxus::prelude::*;

pub mod client;
pub mod config;
pub mod contact;

use config::ContactConfig;
use contact::ContactPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Application root: reads deployment configuration once, provides it as
/// context, and renders the contact page. There is no routing — the form is
/// the whole surface.
#[component]
pub fn App() -> Element {
    use_context_provider(ContactConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ContactPage {}
    }
}
