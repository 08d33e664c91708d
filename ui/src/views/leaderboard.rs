use dioxus::prelude::*;
use tracing::warn;

use api::{FeedConfig, FetchOptions};

use crate::core::platform;
use crate::core::query::{encode_query, parse_query};
use crate::core::selection::{derive_view, Selection};
use crate::leaderboard::{FilterForm, LeaderboardTable, SharePanel, StatHighlights};

/// The dashboard: one fetch per page load, then every interaction
/// recomputes the derived view from the immutable row list and mirrors
/// the applied selection into the page URL.
#[component]
pub fn Leaderboard() -> Element {
    let mut selection = use_signal(initial_selection);

    let rows = use_resource(move || async move {
        let result =
            api::fetch_leaderboard_rows(&FeedConfig::default(), FetchOptions::default()).await;
        if let Err(err) = &result {
            warn!(%err, "leaderboard fetch failed");
        }
        result
    });

    rsx! {
        section { class: "page page-leaderboard",
            header { class: "board-header",
                span { class: "board-header__badge", "Challenge #236590" }
                h1 { "Leaderboard explorer" }
                p { class: "board-header__intro",
                    "Pull the live leaderboard, narrow it down by score and date, and sort it the way you want to read it."
                }
            }

            match &*rows.read_unchecked() {
                None => rsx! {
                    div { class: "board-card board-card--loading",
                        p { class: "board-card__placeholder", "Loading the leaderboard…" }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "board-card board-error",
                        h2 { "Couldn't load the leaderboard" }
                        p { class: "board-error__detail", "{err}" }
                    }
                },
                Some(Ok(all_rows)) => {
                    let current = selection();
                    let view = derive_view(all_rows, &current);
                    rsx! {
                        StatHighlights { summary: view.summary.clone() }
                        FilterForm {
                            initial: current,
                            on_apply: move |next: Selection| {
                                selection.set(next);
                                platform::replace_query(&encode_query(&next));
                            },
                        }
                        SharePanel { selection: current }
                        LeaderboardTable { rows: view.rows }
                    }
                }
            }
        }
    }
}

/// Selection for the first render: whatever the page URL carries, or the
/// defaults when there is no query (or no address bar).
fn initial_selection() -> Selection {
    platform::current_query()
        .map(|query| parse_query(&query))
        .unwrap_or_default()
}
