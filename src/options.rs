use serde::Deserialize;

/// Raw configuration accepted by [`crate::Cors::new`].
///
/// Lists are taken as given; a list containing `"*"` switches the matching
/// policy to allow-all when the options are turned into a [`crate::CorsPolicy`].
/// Field names deserialize in camelCase (`allowedOrigins`, `maxAge`, ...) and
/// every field falls back to its default when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorsOptions {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Seconds a preflight response may be cached. Always emitted, even when zero.
    pub max_age: u64,
    pub supports_credentials: bool,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowed_origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allowed_methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exposed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.supports_credentials = enabled;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
