use dioxus::prelude::*;
use log::LevelFilter;

use folding_panel::cookie::platform_cookie_jar;
use folding_panel::logging;
use folding_panel::pages::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    logging::init(LevelFilter::Debug);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One jar for the whole app, so remounted panels see the last choice
    use_context_provider(platform_cookie_jar);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css",
        }

        Router::<Route> {}
    }
}
