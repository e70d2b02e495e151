use dioxus::prelude::*;

use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
}

// Shared theme, injected inline so the web build needs no asset pipeline.
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Style { "{THEME_CSS}" }
        Router::<Route> {}
    }
}

/// Minimal chrome around the routed page.
#[component]
fn Shell() -> Element {
    rsx! {
        header { class: "topbar",
            div { class: "topbar__inner",
                span { class: "topbar__brand", "Rankscope" }
                span { class: "topbar__subtitle", "keyword rankings over time" }
            }
        }
        main { class: "shell",
            Outlet::<Route> {}
        }
    }
}
