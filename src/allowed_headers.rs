use crate::case::{normalize_lower, normalize_upper};
use crate::constants::WILDCARD;
use crate::headers::join_values;
use indexmap::IndexSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Wildcard: preflight echoes the requested headers, uppercased.
    Any,
    /// Header names stored lowercase.
    List(IndexSet<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(IndexSet::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut headers = IndexSet::new();
        for value in values {
            let value = value.into();
            if value == WILDCARD {
                return Self::Any;
            }
            headers.insert(normalize_lower(&value).into_owned());
        }
        Self::List(headers)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Header value answering a preflight whose `Access-Control-Request-Headers` was `requested`.
    ///
    /// An explicit list is returned as configured, whatever was requested.
    pub fn header_value(&self, requested: &str) -> String {
        match self {
            Self::Any => normalize_upper(requested).into_owned(),
            Self::List(headers) => join_values(headers),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
