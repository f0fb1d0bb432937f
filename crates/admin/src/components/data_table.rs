//! Data table component types.
//!
//! These types define the configuration for the list screens: which columns
//! the table layout shows, which categorical filters and sort fields the
//! toolbar offers, and what the empty state says.

use superadmin_core::SortField;
use superadmin_core::types::{CustomerSortField, PackageType, ShopSortField};

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Option for select filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Single-select filter definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    /// Filter query parameter key.
    pub key: String,
    /// Label of the empty ("any") option.
    pub label: String,
    /// Available options.
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Page heading.
    pub title: String,
    /// Column definitions (the actions column is implicit).
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Sort dropdown options.
    pub sort_options: Vec<FilterOption>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Message shown in place of rows when nothing matches.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str, title: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            title: title.to_string(),
            columns: vec![],
            filters: vec![],
            sort_options: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Offer every field of `S` in the sort dropdown.
    #[must_use]
    pub fn sortable_by<S: SortField>(mut self) -> Self {
        self.sort_options = S::ALL
            .iter()
            .map(|field| FilterOption::new(field.as_param(), &format!("Sort by {}", field.label())))
            .collect();
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set the empty state message.
    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// Number of columns in the table layout, including actions.
    #[must_use]
    pub fn column_span(&self) -> usize {
        self.columns.len() + 1
    }
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::new("customers", "Customer List")
        .column(TableColumn::new("id", "ID"))
        .column(TableColumn::new("name", "Name"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("phone", "Phone"))
        .sortable_by::<CustomerSortField>()
        .search_placeholder("Search by name, email, or phone")
        .empty_state("No customers found")
}

/// Build the shops table configuration.
///
/// `categories` comes from configuration and is offered verbatim, even when
/// it does not cover every shop type present in the data.
#[must_use]
pub fn shops_table_config(categories: &[FilterOption]) -> DataTableConfig {
    let packages = PackageType::ALL
        .iter()
        .map(|p| FilterOption::new(p.as_str(), p.as_str()))
        .collect();

    DataTableConfig::new("shops", "Shop List")
        .column(TableColumn::new("id", "ID"))
        .column(TableColumn::new("name", "Shop Name"))
        .column(TableColumn::new("owner", "Owner Name"))
        .column(TableColumn::new("location", "Location"))
        .column(TableColumn::new("type", "Shop Type"))
        .column(TableColumn::new("package", "Package Type"))
        .filter(TableFilter::select("category", "Category", categories.to_vec()))
        .filter(TableFilter::select("package", "Filter by Package", packages))
        .sortable_by::<ShopSortField>()
        .search_placeholder("Search by name, owner, location, ID, or type")
        .empty_state("No shops found")
}
