use crate::constants::{LIST_SEPARATOR, header};

/// A single response header produced by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: &'static str,
    pub value: String,
}

impl Header {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Ordered header set returned for a single request.
///
/// Callers merge it into their response with add semantics, leaving any
/// pre-existing values of the same name in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Headers {
    /// Looks up a header value, ignoring ASCII case in the name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Vec<Header>,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Vec::with_capacity(estimate),
        }
    }

    /// Appends a header. `Vary` is routed through [`Self::add_vary`]; any other
    /// name replaces an earlier entry of the same name.
    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }

        match self
            .headers
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.value = value,
            None => self.headers.push(Header { name, value }),
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into().trim().to_string();
        if incoming.is_empty() {
            return;
        }

        let Some(existing) = self
            .headers
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(header::VARY))
        else {
            self.headers.push(Header::new(header::VARY, incoming));
            return;
        };

        let already_listed = existing
            .value
            .split(',')
            .map(str::trim)
            .any(|part| part.eq_ignore_ascii_case(&incoming));
        if !already_listed {
            existing.value.push_str(LIST_SEPARATOR);
            existing.value.push_str(&incoming);
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for entry in other.headers {
            self.push(entry.name, entry.value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        Headers {
            entries: self.headers,
        }
    }
}

pub(crate) fn join_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
