use card::CardConfig;
use dioxus::prelude::*;

use ui::{use_activity_log_provider, ActivityLogToggle, CardConfigProvider, Navbar, HTML2CANVAS_SRC};
use views::{Create, Welcome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Welcome {},
        #[route("/create")]
        Create {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled defaults. Missing or malformed keys fall back to built-in values.
const CONFIG_TOML: &str = include_str!("../idcard.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = CardConfig::from_toml_or_default(CONFIG_TOML);
        tracing::info!(
            "Loaded {}: qr {}px, print scale {}, revalidate after edit: {}",
            CardConfig::filename(),
            config.qr.size,
            config.export.print_scale,
            config.validation.revalidate_after_edit,
        );
        config
    });
    use_activity_log_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: HTML2CANVAS_SRC }

        CardConfigProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_home: move |_| {
                nav.push(Route::Welcome {});
            },
            ActivityLogToggle {}
        }
        Outlet::<Route> {}
    }
}
