//! Query-string encoding for list filters.
//!
//! A [`QueryParams`] is an ordered set of declared parameter names, each
//! bound to a [`QueryValue`]: absent, one scalar, or several scalars.
//! [`QueryParams::encode`] renders it as `name=value&name=value` with every
//! key and value percent-encoded. Absent parameters and empty sequences emit
//! nothing at all, so a filter with no criteria encodes to the empty string.
//!
//! Values are emitted in the order they were supplied. Filters that accept a
//! set of enum values normalise the set before inserting it (see
//! [`ValidatorFilter`](crate::resources::states::ValidatorFilter)).

use std::fmt;

/// The value bound to one query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryValue {
    #[default]
    Absent,
    Single(String),
    Many(Vec<String>),
}

impl From<Option<String>> for QueryValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(QueryValue::Absent, QueryValue::Single)
    }
}

/// An ordered parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    params: Vec<(&'static str, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`. Re-binding a name replaces its value in place.
    pub fn insert(&mut self, name: &'static str, value: QueryValue) -> &mut Self {
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Bind `name` to a single scalar when `value` is present.
    pub fn optional<V: fmt::Display>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.insert(name, value.map(|v| v.to_string()).into());
        self
    }

    /// Bind `name` to every item of `values`, in iteration order.
    pub fn repeated<I>(mut self, name: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        self.insert(name, QueryValue::Many(values));
        self
    }

    /// `true` when encoding would produce the empty string.
    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// Every `(name, value)` pair that will be emitted, unencoded.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params.iter().flat_map(|(name, value)| {
            let values: &[String] = match value {
                QueryValue::Absent => &[],
                QueryValue::Single(v) => std::slice::from_ref(v),
                QueryValue::Many(vs) => vs,
            };
            values.iter().map(move |v| (*name, v.as_str()))
        })
    }

    /// Render as a percent-encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        self.pairs()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A typed filter that knows how to render itself as query parameters.
pub trait QueryFilter {
    fn to_query(&self) -> QueryParams;
}

/// The filter of endpoints that take no query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl QueryFilter for NoFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
    }
}
