mod filter_form;
pub use filter_form::FilterForm;

mod table;
pub use table::LeaderboardTable;

mod stats;
pub use stats::StatHighlights;

mod share;
pub use share::SharePanel;
