//! Filter models and state shared by the filter widgets.

extern crate serde;


pub mod filter_condition;
pub mod filter_config;
pub mod filter_entry;
pub mod active_filters;
pub mod predicate;
pub mod query_builder;
pub mod column_filter;
pub mod grid;

