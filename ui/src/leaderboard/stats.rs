use dioxus::prelude::*;

use crate::core::format;
use crate::core::stats::Summary;

#[component]
pub fn StatHighlights(summary: Summary) -> Element {
    let total = format::format_count(summary.total);
    let filtered = format::format_count(summary.filtered);
    let best = summary
        .best_score
        .map(format::format_score)
        .unwrap_or_else(|| "—".to_string());
    let latest = summary
        .latest_submission
        .clone()
        .unwrap_or_else(|| "No data".to_string());

    rsx! {
        section { class: "board-highlights",
            div { class: "board-highlight",
                span { class: "board-highlight__label", "Total submissions" }
                strong { class: "board-highlight__value", "{total}" }
                span { class: "board-highlight__meta", "Everything the feed returned" }
            }
            div { class: "board-highlight",
                span { class: "board-highlight__label", "Matching filters" }
                strong { class: "board-highlight__value", "{filtered}" }
                span { class: "board-highlight__meta", "Rows that clear the current bounds" }
            }
            div { class: "board-highlight",
                span { class: "board-highlight__label", "Best score" }
                strong { class: "board-highlight__value board-highlight__value--score", "{best}" }
                span { class: "board-highlight__meta", "Highest score in the filtered view" }
            }
            div { class: "board-highlight",
                span { class: "board-highlight__label", "Latest submission" }
                strong { class: "board-highlight__value", "{latest}" }
                span { class: "board-highlight__meta", "Newest entry matching the filters" }
            }
        }
    }
}
