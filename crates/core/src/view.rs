//! List projection: search, categorical filters, sort and pagination.
//!
//! Every list screen renders the output of [`project`], a pure function of the
//! full record collection and the screen's current controls. The record
//! collection is borrowed, never mutated; the result holds references into it.
//!
//! # Pipeline
//!
//! 1. **Filter** - case-insensitive substring search over the record's
//!    searchable fields, plus exact (case-sensitive) equality on every
//!    categorical facet that is set.
//! 2. **Sort** - locale-aware comparison of one field, ascending or
//!    descending. The sort is stable, so ties keep store order. Missing or
//!    empty values sort last in both directions.
//! 3. **Paginate** - 1-based fixed-size pages. A page past the end is empty;
//!    the projection never clamps the requested page.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// A to Z.
    #[default]
    Asc,
    /// Z to A.
    Desc,
}

impl SortOrder {
    /// Parse a query-string value (`asc` / `desc`).
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Query-string value for this order.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Orient an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A field a list can be sorted by.
///
/// Implemented by small `Copy` enums, one per entity type. The default
/// variant is the field a screen sorts by before the user picks one.
pub trait SortField: Copy + Eq + Default + 'static {
    /// Every sortable field, in the order the sort dropdown lists them.
    const ALL: &'static [Self];

    /// Query-string value.
    fn as_param(self) -> &'static str;

    /// Human label for the sort dropdown.
    fn label(self) -> &'static str;

    /// Parse a query-string value.
    #[must_use]
    fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_param() == s)
    }
}

/// A record that can be searched, filtered and sorted by [`project`].
pub trait Projectable {
    /// Fields this record can be sorted by.
    type Sort: SortField;
    /// Categorical facets this record can be filtered by.
    ///
    /// Records without facets use [`std::convert::Infallible`].
    type Facet: Copy;

    /// Values the free-text search looks into.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Value compared when sorting by `field`. `None` sorts last.
    fn sort_value(&self, field: Self::Sort) -> Option<&str>;

    /// Value compared (exactly) against a facet filter.
    fn facet_value(&self, facet: Self::Facet) -> &str;
}

/// The controls that drive one projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery<S, F> {
    /// Free-text search; empty matches everything.
    pub search: String,
    /// Set facet filters; each must match exactly.
    pub facets: Vec<(F, String)>,
    /// Field to sort by.
    pub sort: S,
    /// Sort direction.
    pub order: SortOrder,
    /// 1-based page number. `0` is read as page 1.
    pub page: usize,
    /// Records per page.
    pub page_size: NonZeroUsize,
}

impl<S: SortField, F> ViewQuery<S, F> {
    /// Query for the first page with no search, no facets and the default sort.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            facets: Vec::new(),
            sort: S::default(),
            order: SortOrder::Asc,
            page: 1,
            page_size,
        }
    }
}

/// One page of a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// Records on this page, in display order.
    pub items: Vec<&'a T>,
    /// 1-based page number that was requested.
    pub page: usize,
    /// `ceil(total_matches / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// Records that passed the filters, across all pages.
    pub total_matches: usize,
}

impl<T> PageView<'_, T> {
    /// Whether a page before this one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter, sort and paginate `records`.
#[must_use]
pub fn project<'a, T: Projectable>(
    records: &'a [T],
    query: &ViewQuery<T::Sort, T::Facet>,
) -> PageView<'a, T> {
    let sorted = filter_and_sort(records, query);
    paginate(sorted, query.page, query.page_size)
}

/// Filter and sort `records` without paginating.
#[must_use]
pub fn filter_and_sort<'a, T: Projectable>(
    records: &'a [T],
    query: &ViewQuery<T::Sort, T::Facet>,
) -> Vec<&'a T> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<&T> = records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| {
            query
                .facets
                .iter()
                .all(|(facet, wanted)| record.facet_value(*facet) == wanted.as_str())
        })
        .collect();

    // slice::sort_by is stable: ties keep store order.
    matched.sort_by(|a, b| {
        compare_values(
            a.sort_value(query.sort),
            b.sort_value(query.sort),
            query.order,
        )
    });

    matched
}

/// Slice an already sorted sequence into one page.
#[must_use]
pub fn paginate<'a, T>(
    sorted: Vec<&'a T>,
    page: usize,
    page_size: NonZeroUsize,
) -> PageView<'a, T> {
    let page = page.max(1);
    let total_matches = sorted.len();
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size);

    PageView {
        items: sorted.into_iter().skip(start).take(size).collect(),
        page,
        total_pages: page_count(total_matches, page_size),
        total_matches,
    }
}

/// Number of pages needed for `matches` records.
#[must_use]
pub const fn page_count(matches: usize, page_size: NonZeroUsize) -> usize {
    matches.div_ceil(page_size.get())
}

/// Whether any searchable field contains `needle`.
///
/// `needle` must already be lowercased.
fn matches_search<T: Projectable>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Compare two optional sort values; missing and empty values go last.
fn compare_values(a: Option<&str>, b: Option<&str>, order: SortOrder) -> Ordering {
    let a = a.filter(|v| !v.is_empty());
    let b = b.filter(|v| !v.is_empty());

    match (a, b) {
        (Some(a), Some(b)) => order.apply(locale_compare(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-aware string comparison.
///
/// Compares in three passes, each consulted only on a tie in the previous one:
/// base letters (accents and case folded away, so `"Émile" < "Zach"`), then
/// accents (`"resume" < "résumé"`), then case with lowercase first
/// (`"apple" < "Apple" < "banana"`).
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        // Uppercase code points are lower than lowercase ones, so reverse.
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
