//! Query string builder.
//!
//! Parameters are always emitted in the same order: fields, populate,
//! filters, sort, pagination, locale. Bracket syntax and `$` operators stay
//! literal; names and values are percent-encoded.

use std::fmt;

use crate::query::populate::Populate;

pub const SLUG_FIELD: &str = "slug";

/// Ordered list of already-encoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a key and value that are already in wire form.
    pub(crate) fn push_raw(&mut self, key: String, value: String) {
        self.pairs.push((key, value));
    }

    /// Push a single value, encoding it.
    pub fn push(&mut self, key: &str, value: &str) {
        self.push_raw(key.to_string(), encode(value));
    }

    /// Push a comma-joined list, encoding each entry.
    pub fn push_list(&mut self, key: &str, values: &[String]) {
        let joined = values
            .iter()
            .map(|v| encode(v))
            .collect::<Vec<_>>()
            .join(",");
        self.push_raw(key.to_string(), joined);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `prefix[segment]` with the segment encoded.
pub(crate) fn bracket(prefix: &str, segment: &str) -> String {
    format!("{}[{}]", prefix, encode(segment))
}

/// Filter comparison operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterOperator {
    #[default]
    Eq,
    Ne,
    Contains,
    ContainsI,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "$eq",
            FilterOperator::Ne => "$ne",
            FilterOperator::Contains => "$contains",
            FilterOperator::ContainsI => "$containsi",
            FilterOperator::Lt => "$lt",
            FilterOperator::Lte => "$lte",
            FilterOperator::Gt => "$gt",
            FilterOperator::Gte => "$gte",
        }
    }
}

/// One filter condition. A dotted path (`region.slug`) filters on a field
/// of a related entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub path: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl Filter {
    pub fn new(path: &str, operator: FilterOperator, value: &str) -> Self {
        Self {
            path: path.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    pub fn eq(path: &str, value: &str) -> Self {
        Self::new(path, FilterOperator::Eq, value)
    }

    /// `filters[a][b][$op]`
    pub fn key(&self) -> String {
        let mut key = self
            .path
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold("filters".to_string(), |acc, segment| bracket(&acc, segment));
        key.push('[');
        key.push_str(self.operator.as_str());
        key.push(']');
        key
    }

    fn is_slug_eq(&self) -> bool {
        self.path == SLUG_FIELD && self.operator == FilterOperator::Eq
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// A structured CMS request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub fields: Vec<String>,
    pub populate: Option<Populate>,
    pub filters: Vec<Filter>,
    pub sort: Vec<String>,
    pub pagination: Pagination,
    pub locale: Option<String>,
    /// Cache lifetime hint in seconds; the client default applies when unset.
    pub revalidate: Option<u64>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn populate(mut self, populate: Populate) -> Self {
        self.populate = Some(populate);
        self
    }

    pub fn filter(mut self, path: &str, value: &str) -> Self {
        self.filters.push(Filter::eq(path, value));
        self
    }

    pub fn filter_with(mut self, path: &str, operator: FilterOperator, value: &str) -> Self {
        self.filters.push(Filter::new(path, operator, value));
        self
    }

    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = sort.into_iter().map(Into::into).collect();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn revalidate(mut self, seconds: u64) -> Self {
        self.revalidate = Some(seconds);
        self
    }
}

/// Build the ordered parameter list for a request.
pub fn build_query_params(options: &QueryOptions) -> QueryParams {
    let mut params = QueryParams::new();
    write_options(options, &mut params, false);
    params
}

/// Build the query string (without a leading `?`).
pub fn build_query(options: &QueryOptions) -> String {
    build_query_params(options).to_string()
}

/// Query for the entry whose `slug` equals `slug`.
///
/// The slug filter always comes first; a caller-supplied slug filter is
/// replaced rather than duplicated.
pub fn build_slug_query(slug: &str, options: &QueryOptions) -> String {
    let mut params = QueryParams::new();
    let slug_filter = Filter::eq(SLUG_FIELD, slug);
    params.push(&slug_filter.key(), &slug_filter.value);
    write_options(options, &mut params, true);
    params.to_string()
}

fn write_options(options: &QueryOptions, params: &mut QueryParams, skip_slug: bool) {
    if !options.fields.is_empty() {
        params.push_list("fields", &options.fields);
    }

    if let Some(populate) = &options.populate {
        populate.write_params(params);
    }

    for filter in &options.filters {
        if skip_slug && filter.is_slug_eq() {
            continue;
        }
        params.push(&filter.key(), &filter.value);
    }

    if !options.sort.is_empty() {
        params.push_list("sort", &options.sort);
    }

    if let Some(page) = options.pagination.page {
        params.push("pagination[page]", &page.to_string());
    }
    if let Some(page_size) = options.pagination.page_size {
        params.push("pagination[pageSize]", &page_size.to_string());
    }

    if let Some(locale) = &options.locale {
        params.push("locale", locale);
    }
}
