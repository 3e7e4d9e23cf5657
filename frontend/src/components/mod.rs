pub mod error_boundary;
pub mod navbar;
pub mod filter_chips;
pub mod query_builder;
pub mod data_table;
