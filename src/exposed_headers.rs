use crate::headers::join_values;
use std::ops::Deref;

/// Header names exposed to client scripts through `Access-Control-Expose-Headers`.
///
/// Kept in configured order and emitted verbatim; an empty list omits the header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(join_values(&self.values))
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
