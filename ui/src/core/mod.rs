//! Pure logic behind the dashboard: date handling, the filter/sort engine,
//! summary statistics, the query-string codec, and platform glue.

pub mod dates;
pub mod filters;
pub mod format;
pub mod platform;
pub mod query;
pub mod selection;
pub mod sort;
pub mod stats;

pub use filters::{apply_filters, FilterSelection};
pub use selection::{derive_view, Selection};
pub use sort::{sort_rows, SortBy};
pub use stats::{summarize, Summary};
