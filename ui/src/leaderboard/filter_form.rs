use dioxus::prelude::*;

use crate::core::dates::format_day;
use crate::core::filters::FilterSelection;
use crate::core::selection::Selection;
use crate::core::sort::SortBy;

/// Filter and sort controls. Edits stay local until "Apply filters" builds
/// a fresh `Selection` (raw text parsed once, bad input silently becoming
/// "no bound") and hands it to the owner.
#[component]
pub fn FilterForm(initial: Selection, on_apply: EventHandler<Selection>) -> Element {
    let mut min_score = use_signal(|| {
        initial
            .filters
            .min_score
            .map(|min| min.to_string())
            .unwrap_or_default()
    });
    let mut start_day = use_signal(|| {
        initial
            .filters
            .start_day
            .map(format_day)
            .unwrap_or_default()
    });
    let mut end_day =
        use_signal(|| initial.filters.end_day.map(format_day).unwrap_or_default());
    let mut sort_by = use_signal(|| initial.sort_by);

    let apply = move |evt: FormEvent| {
        evt.prevent_default();
        on_apply.call(Selection {
            filters: FilterSelection::from_raw(&min_score(), &start_day(), &end_day()),
            sort_by: sort_by(),
        });
    };

    let reset = move |_| {
        min_score.set(String::new());
        start_day.set(String::new());
        end_day.set(String::new());
        sort_by.set(SortBy::default());
        on_apply.call(Selection::default());
    };

    let sort_value = sort_by().as_str();

    rsx! {
        form { class: "board-card board-filters", onsubmit: apply,
            label { class: "board-filters__field",
                span { "Minimum score" }
                input {
                    r#type: "number",
                    name: "min_score",
                    inputmode: "decimal",
                    step: "any",
                    placeholder: "e.g. 0.9",
                    value: "{min_score}",
                    oninput: move |evt| min_score.set(evt.value()),
                }
            }

            label { class: "board-filters__field",
                span { "Start date" }
                input {
                    r#type: "date",
                    name: "start_date",
                    value: "{start_day}",
                    oninput: move |evt| start_day.set(evt.value()),
                }
            }

            label { class: "board-filters__field",
                span { "End date" }
                input {
                    r#type: "date",
                    name: "end_date",
                    value: "{end_day}",
                    oninput: move |evt| end_day.set(evt.value()),
                }
            }

            label { class: "board-filters__field",
                span { "Sort by" }
                select {
                    name: "sort_by",
                    value: "{sort_value}",
                    oninput: move |evt| sort_by.set(SortBy::parse_or_default(&evt.value())),
                    { SortBy::ALL.iter().map(|option| {
                        let value = option.as_str();
                        let label = option.label();
                        let is_active = *option == sort_by();
                        rsx! {
                            option { key: "{value}", value: "{value}", selected: is_active, "{label}" }
                        }
                    }) }
                }
            }

            div { class: "board-filters__actions",
                button { r#type: "submit", class: "button button--primary", "Apply filters" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: reset,
                    "Reset"
                }
            }
        }
    }
}
