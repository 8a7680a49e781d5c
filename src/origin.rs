use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Origins permitted to make cross-origin requests.
///
/// Matching is exact and case-sensitive; there is no subdomain or pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin passes and responses carry `Access-Control-Allow-Origin: *`.
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedOrigins {
    /// Builds the policy from configured values. A `"*"` entry anywhere in the
    /// list selects [`Self::Any`]; other values are stored verbatim.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut origins = IndexSet::new();
        for value in values {
            let value = value.into();
            if value == WILDCARD {
                return Self::Any;
            }
            origins.insert(value);
        }
        Self::List(origins)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(origins) => origins.contains(origin),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
