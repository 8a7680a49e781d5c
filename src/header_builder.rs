use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;
use crate::result::RejectionReason;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// `*` when every origin is allowed, otherwise the request origin echoed
    /// back together with `Vary: Origin`.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        if self.policy.allowed_origins.is_any() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
            return headers;
        }

        let mut headers = HeaderCollection::with_estimate(2);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.supports_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.policy.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_methods_header(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<HeaderCollection, RejectionReason> {
        let requested = request
            .access_control_request_method
            .ok_or(RejectionReason::MissingRequestMethodHeader)?;

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.policy.allowed_methods.header_value(requested),
        );
        Ok(headers)
    }

    /// Only answered when the request announced the headers it intends to send.
    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        match request.access_control_request_headers {
            Some(requested) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    self.policy.allowed_headers.header_value(requested),
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.policy.max_age.to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
