#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// assets directory needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Rankscope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
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
