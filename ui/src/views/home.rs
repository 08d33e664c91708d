use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Podium" }
            p { "A small dashboard for exploring a competition leaderboard feed." }
            p {
                "Pull the latest submissions, narrow them down by score and date, and share the exact view you are looking at."
            }

            ul { class: "page-home__features",
                li { "Filter by minimum score and an inclusive date range" }
                li { "Four orderings: recency, score both ways, and official ranking" }
                li { "Shareable links that reproduce the filtered view" }
            }
            p { class: "page-home__cta",
                "Head to the leaderboard to start exploring."
            }
        }
    }
}
