pub mod condition_selector;
pub mod filter_indicator;
pub mod popover;
pub mod search_box;
