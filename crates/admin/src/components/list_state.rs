//! View-model for the list screens.
//!
//! Every control on a list screen (search box, filters, sort, page, view
//! mode) travels in the query string. [`ListState`] is the parsed form of
//! those parameters; it feeds the core projection and builds the links that
//! change one control while preserving the rest.
//!
//! Unknown or malformed values fall back to defaults instead of failing the
//! request.

use std::num::NonZeroUsize;

use serde::Deserialize;
use superadmin_core::{PageView, SortField, SortOrder, ViewQuery};
use url::form_urlencoded;

use super::data_table::{DataTableConfig, FilterOption, TableFilter};

/// Records per page on every list screen.
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// Raw list query parameters.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub package: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    pub view: Option<String>,
}

/// Presentation mode of a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One row per record.
    #[default]
    List,
    /// One card per record in a grid.
    Card,
}

impl ViewMode {
    /// Every mode, in toggle order.
    pub const ALL: [Self; 2] = [Self::List, Self::Card];

    /// Parse a query-string value.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Self::List),
            "card" => Some(Self::Card),
            _ => None,
        }
    }

    /// Query-string value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Card => "card",
        }
    }

    /// Toggle button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "List View",
            Self::Card => "Card View",
        }
    }
}

/// Parsed controls of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<S> {
    pub search: String,
    pub category: Option<String>,
    pub package: Option<String>,
    pub sort: S,
    pub order: SortOrder,
    /// 1-based; never clamped to the page count.
    pub page: usize,
    pub view: ViewMode,
}

impl<S: SortField> Default for ListState<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            package: None,
            sort: S::default(),
            order: SortOrder::Asc,
            page: 1,
            view: ViewMode::List,
        }
    }
}

impl<S: SortField> ListState<S> {
    /// Parse query parameters, falling back to defaults for anything unusable.
    #[must_use]
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            search: query.q.clone().unwrap_or_default(),
            category: non_blank(query.category.as_deref()),
            package: non_blank(query.package.as_deref()),
            sort: query
                .sort
                .as_deref()
                .and_then(S::from_param)
                .unwrap_or_default(),
            order: query
                .dir
                .as_deref()
                .and_then(SortOrder::from_param)
                .unwrap_or_default(),
            page: query
                .page
                .as_deref()
                .and_then(|p| p.trim().parse::<usize>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(1),
            view: query
                .view
                .as_deref()
                .and_then(ViewMode::from_param)
                .unwrap_or_default(),
        }
    }

    /// Projection query for these controls.
    #[must_use]
    pub fn view_query<F>(&self, facets: Vec<(F, String)>) -> ViewQuery<S, F> {
        ViewQuery {
            search: self.search.clone(),
            facets,
            sort: self.sort,
            order: self.order,
            page: self.page,
            page_size: PAGE_SIZE,
        }
    }

    /// Query string for the current controls, without a leading `?`.
    ///
    /// Parameters at their default value are omitted.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.encode(self.page, self.view)
    }

    /// Link to `path` with the current controls.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        with_query(path, &self.query_string())
    }

    /// Link to `path` showing `page`, other controls unchanged.
    #[must_use]
    pub fn page_href(&self, path: &str, page: usize) -> String {
        with_query(path, &self.encode(page, self.view))
    }

    /// Link to `path` in `view` mode, other controls unchanged.
    #[must_use]
    pub fn view_href(&self, path: &str, view: ViewMode) -> String {
        with_query(path, &self.encode(self.page, view))
    }

    /// Form controls for rendering the toolbar of `config`'s table.
    #[must_use]
    pub fn controls(&self, config: &DataTableConfig) -> Controls {
        Controls {
            search: self.search.clone(),
            view: self.view.as_param(),
            sort_options: select_options(&config.sort_options, self.sort.as_param()),
            order_options: [SortOrder::Asc, SortOrder::Desc]
                .into_iter()
                .map(|order| SelectOption {
                    value: order.as_param().to_string(),
                    label: match order {
                        SortOrder::Asc => "Ascending".to_string(),
                        SortOrder::Desc => "Descending".to_string(),
                    },
                    selected: order == self.order,
                })
                .collect(),
            filters: config
                .filters
                .iter()
                .map(|filter| self.filter_control(filter))
                .collect(),
        }
    }

    fn filter_control(&self, filter: &TableFilter) -> FilterControl {
        let current = match filter.key.as_str() {
            "category" => self.category.as_deref(),
            "package" => self.package.as_deref(),
            _ => None,
        };
        FilterControl {
            key: filter.key.clone(),
            label: filter.label.clone(),
            options: select_options(&filter.options, current.unwrap_or_default()),
        }
    }

    fn encode(&self, page: usize, view: ViewMode) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair("q", &self.search);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(package) = &self.package {
            serializer.append_pair("package", package);
        }
        if self.sort != S::default() {
            serializer.append_pair("sort", self.sort.as_param());
        }
        if self.order != SortOrder::Asc {
            serializer.append_pair("dir", self.order.as_param());
        }
        if page != 1 {
            serializer.append_pair("page", &page.to_string());
        }
        if view != ViewMode::List {
            serializer.append_pair("view", view.as_param());
        }
        serializer.finish()
    }
}

/// Toolbar state ready for a template.
#[derive(Debug, Clone)]
pub struct Controls {
    pub search: String,
    /// Current view mode parameter, carried through the filter form.
    pub view: &'static str,
    pub sort_options: Vec<SelectOption>,
    pub order_options: Vec<SelectOption>,
    pub filters: Vec<FilterControl>,
}

/// One `<option>` of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A categorical filter select.
#[derive(Debug, Clone)]
pub struct FilterControl {
    pub key: String,
    /// Label of the empty option.
    pub label: String,
    pub options: Vec<SelectOption>,
}

/// Pagination bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    /// `None` disables the Previous button.
    pub previous_href: Option<String>,
    /// `None` disables the Next button.
    pub next_href: Option<String>,
}

impl Pager {
    /// Pager for `view`, linking back to `path` with `state`'s controls.
    #[must_use]
    pub fn new<T, S: SortField>(view: &PageView<'_, T>, state: &ListState<S>, path: &str) -> Self {
        Self {
            page: view.page,
            total_pages: view.total_pages,
            total_matches: view.total_matches,
            previous_href: view
                .has_previous()
                .then(|| state.page_href(path, view.page - 1)),
            next_href: view.has_next().then(|| state.page_href(path, view.page + 1)),
        }
    }
}

/// A view-mode toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewToggle {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Toggle buttons for every view mode.
#[must_use]
pub fn view_toggles<S: SortField>(state: &ListState<S>, path: &str) -> Vec<ViewToggle> {
    ViewMode::ALL
        .into_iter()
        .map(|mode| ViewToggle {
            label: mode.label(),
            href: state.view_href(path, mode),
            active: mode == state.view,
        })
        .collect()
}

fn select_options(options: &[FilterOption], current: &str) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| SelectOption {
            value: option.value.clone(),
            label: option.label.clone(),
            selected: option.value == current,
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use superadmin_core::{CustomerSortField, ShopSortField};

    use super::*;
    use crate::components::data_table::{customers_table_config, shops_table_config};

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let mut q = ListQuery::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "q" => q.q = value,
                "category" => q.category = value,
                "package" => q.package = value,
                "sort" => q.sort = value,
                "dir" => q.dir = value,
                "page" => q.page = value,
                "view" => q.view = value,
                _ => unreachable!(),
            }
        }
        q
    }

    #[test]
    fn test_defaults() {
        let state: ListState<CustomerSortField> = ListState::from_query(&ListQuery::default());
        assert_eq!(state, ListState::default());
        assert_eq!(state.query_string(), "");
        assert_eq!(state.href("/customers"), "/customers");
    }

    #[test]
    fn test_parse_all_controls() {
        let state: ListState<ShopSortField> = ListState::from_query(&query(&[
            ("q", "tech"),
            ("category", "Medical"),
            ("package", "Premium"),
            ("sort", "owner"),
            ("dir", "desc"),
            ("page", "2"),
            ("view", "card"),
        ]));

        assert_eq!(state.search, "tech");
        assert_eq!(state.category.as_deref(), Some("Medical"));
        assert_eq!(state.package.as_deref(), Some("Premium"));
        assert_eq!(state.sort, ShopSortField::Owner);
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(state.page, 2);
        assert_eq!(state.view, ViewMode::Card);
        assert_eq!(
            state.query_string(),
            "q=tech&category=Medical&package=Premium&sort=owner&dir=desc&page=2&view=card"
        );
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let state: ListState<CustomerSortField> = ListState::from_query(&query(&[
            ("sort", "salary"),
            ("dir", "sideways"),
            ("page", "0"),
            ("view", "grid"),
            ("category", "  "),
        ]));
        assert_eq!(state, ListState::default());

        let state: ListState<CustomerSortField> =
            ListState::from_query(&query(&[("page", "-3")]));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_is_url_encoded() {
        let state: ListState<CustomerSortField> =
            ListState::from_query(&query(&[("q", "jane & co")]));
        assert_eq!(state.href("/customers"), "/customers?q=jane+%26+co");
    }

    #[test]
    fn test_view_href_preserves_other_controls() {
        let state: ListState<CustomerSortField> =
            ListState::from_query(&query(&[("q", "a"), ("page", "2")]));
        assert_eq!(
            state.view_href("/customers", ViewMode::Card),
            "/customers?q=a&page=2&view=card"
        );

        let toggles = view_toggles(&state, "/customers");
        assert_eq!(toggles.len(), 2);
        assert!(toggles[0].active);
        assert!(!toggles[1].active);
        assert_eq!(toggles[0].href, "/customers?q=a&page=2");
    }

    #[test]
    fn test_view_query_uses_page_size() {
        let state: ListState<CustomerSortField> =
            ListState::from_query(&query(&[("q", "jane"), ("page", "3")]));
        let vq = state.view_query::<std::convert::Infallible>(vec![]);
        assert_eq!(vq.search, "jane");
        assert_eq!(vq.page, 3);
        assert_eq!(vq.page_size.get(), 5);
    }

    #[test]
    fn test_pager_links() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        let refs: Vec<&i32> = items.iter().collect();
        let view = superadmin_core::view::paginate(refs, 1, PAGE_SIZE);
        let state: ListState<CustomerSortField> = ListState::default();

        let pager = Pager::new(&view, &state, "/customers");
        assert_eq!(pager.total_pages, 2);
        assert!(pager.previous_href.is_none());
        assert_eq!(pager.next_href.as_deref(), Some("/customers?page=2"));
    }

    #[test]
    fn test_pager_for_empty_result() {
        let view = superadmin_core::view::paginate::<i32>(vec![], 1, PAGE_SIZE);
        let state: ListState<CustomerSortField> = ListState::default();

        let pager = Pager::new(&view, &state, "/customers");
        assert_eq!(pager.page, 1);
        assert_eq!(pager.total_pages, 0);
        assert!(pager.previous_href.is_none());
        assert!(pager.next_href.is_none());
    }

    #[test]
    fn test_controls_mark_selected_options() {
        let state: ListState<ShopSortField> = ListState::from_query(&query(&[
            ("category", "Footwear"),
            ("sort", "location"),
            ("dir", "desc"),
        ]));
        let config = shops_table_config(&[
            FilterOption::new("General", "General Shop"),
            FilterOption::new("Footwear", "Footwear"),
        ]);
        let controls = state.controls(&config);

        let selected: Vec<&str> = controls
            .sort_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["location"]);
        assert!(controls.order_options[1].selected);

        let category = &controls.filters[0];
        assert_eq!(category.key, "category");
        assert!(!category.options[0].selected);
        assert!(category.options[1].selected);
        assert!(controls.filters[1].options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_customer_controls_have_no_filters() {
        let state: ListState<CustomerSortField> = ListState::default();
        let controls = state.controls(&customers_table_config());
        assert!(controls.filters.is_empty());
        assert_eq!(controls.view, "list");
        assert!(controls.sort_options[0].selected);
    }
}
