use cors_gate::constants::method;
use cors_gate::{Cors, CorsDecision, CorsOptions, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_allowed_origins(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_allowed_methods(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_allowed_headers(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_exposed_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.with_credentials(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.options = self.options.with_max_age(value);
        self
    }

    /// Policy accepting every origin, method and header.
    pub fn allow_all(self) -> Self {
        self.origins(["*"]).methods(["*"]).allowed_headers(["*"])
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.evaluate(&ctx)
    }
}

pub struct PreflightRequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::OPTIONS.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    /// Overrides the `OPTIONS` token, e.g. to check case-insensitive detection.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.evaluate(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
