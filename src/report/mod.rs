//! Persisting and presenting result tables.
//!
//! - `table`: CSV writer and loader
//! - `summary`: aligned console tables

pub mod summary;
pub mod table;

pub use summary::{render_table, summarize};
pub use table::{load_table, write_table, LoadedRow, LoadedTable};
