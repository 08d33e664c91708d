use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (components/app_navbar.rs pairs with assets/styling/navbar.css)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms can register a `NavBuilder` providing fully constructed
/// `Link` elements, so `ui` does not need to know each platform's `Route`
/// enum.
///
/// Each closure receives the label and returns a link that already
/// contains it as its child, preserving styling. If no builder is
/// registered we fall back to any raw `children` passed.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub leaderboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Build the internal nav if a platform registered its links.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let leaderboard = (builder.leaderboard)("Leaderboard");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {leaderboard}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        // Include the shared navbar stylesheet (and inline it in release native builds)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Podium" }
                    }
                    span { class: "navbar__brand-subtitle", "Leaderboard explorer" }
                }

                // Navigation (registered builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
