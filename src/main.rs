mod clipboard;
mod customer;
mod order;
mod state;
mod theme;
mod views;

use dioxus::prelude::*;

use views::Checkout;

#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[route("/")]
    Checkout {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting pgx-checkout page");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Secure Checkout - TechOne Online" }
        Router::<Route> {}
    }
}
