use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::options::CorsOptions;
use crate::origin::AllowedOrigins;

/// Normalized, immutable CORS policy.
///
/// Built once from [`CorsOptions`]: wildcards are folded into the `Any`
/// variants, methods are uppercased and header names lowercased. Nothing is
/// re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorsPolicy {
    pub(crate) allowed_origins: AllowedOrigins,
    pub(crate) allowed_methods: AllowedMethods,
    pub(crate) allowed_headers: AllowedHeaders,
    pub(crate) exposed_headers: ExposedHeaders,
    pub(crate) max_age: u64,
    pub(crate) supports_credentials: bool,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        let CorsOptions {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            max_age,
            supports_credentials,
        } = options;

        Self {
            allowed_origins: AllowedOrigins::list(allowed_origins),
            allowed_methods: AllowedMethods::list(allowed_methods),
            allowed_headers: AllowedHeaders::list(allowed_headers),
            exposed_headers: ExposedHeaders::list(exposed_headers),
            max_age,
            supports_credentials,
        }
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    pub fn supports_credentials(&self) -> bool {
        self.supports_credentials
    }
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
