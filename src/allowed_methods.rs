use crate::case::normalize_upper;
use crate::constants::WILDCARD;
use crate::headers::join_values;
use indexmap::IndexSet;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Every method is accepted; preflight echoes the requested method.
    Any,
    /// Explicit method tokens, stored uppercase.
    List(IndexSet<String>),
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedMethods {
    /// Construct the policy from configured tokens, uppercasing each one.
    /// A `"*"` entry selects [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut methods = IndexSet::new();
        for value in values {
            let value = value.into();
            if value == WILDCARD {
                return Self::Any;
            }
            methods.insert(normalize_upper(&value).into_owned());
        }
        Self::List(methods)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Checks the request method verbatim: `post` does not match a configured `POST`.
    pub fn allows_method(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(methods) => methods.contains(method),
        }
    }

    /// Header value answering a preflight that asked for `requested_method`.
    pub fn header_value(&self, requested_method: &str) -> String {
        match self {
            Self::Any => normalize_upper(requested_method).into_owned(),
            Self::List(methods) => join_values(methods),
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
