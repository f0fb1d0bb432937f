//! Reusable UI component types for the list screens.

pub mod data_table;
pub mod list_state;

pub use data_table::{DataTableConfig, FilterOption, TableColumn, TableFilter};
pub use list_state::{ListQuery, ListState, Pager, ViewMode};
