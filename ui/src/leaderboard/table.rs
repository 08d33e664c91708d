use api::LeaderboardRow;
use dioxus::prelude::*;

use crate::core::{dates, format};

#[component]
pub fn LeaderboardTable(rows: Vec<LeaderboardRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "board-card board-table board-table--empty",
                p { class: "board-card__placeholder",
                    "No submissions match the current filters."
                }
            }
        };
    }

    rsx! {
        div { class: "board-card board-table",
            table { class: "board-table__grid",
                thead {
                    tr {
                        th { class: "board-table__rank", "Rank" }
                        th { "Team" }
                        th { class: "board-table__score", "Score" }
                        th { class: "board-table__count", "Submissions" }
                        th { class: "board-table__time", "Submitted" }
                    }
                }
                tbody {
                    for (index, row) in rows.iter().enumerate() {
                        {render_row(row, index)}
                    }
                }
            }
        }
    }
}

fn render_row(row: &LeaderboardRow, index: usize) -> Element {
    let members = row
        .team_info
        .iter()
        .map(|member| member.name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let score = format::format_score(row.score);
    let submitted = dates::format_submission_time(&row.c_time);
    let row_class = if index == 0 {
        "board-table__row board-table__row--top"
    } else {
        "board-table__row"
    };

    rsx! {
        tr { key: "{row.sub_id}", class: "{row_class}",
            td { class: "board-table__rank", "#{row.ranking}" }
            td {
                div { class: "board-table__team",
                    span { class: "board-table__team-name", "{row.team_name}" }
                    if !members.is_empty() {
                        span { class: "board-table__members", "{members}" }
                    }
                }
            }
            td { class: "board-table__score", "{score}" }
            td { class: "board-table__count", "{row.submission_cnt}" }
            td { class: "board-table__time", "{submitted}" }
        }
    }
}
