use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, RejectionReason};
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests against a [`CorsPolicy`].
///
/// Holds no per-request state, so a single instance can be shared across
/// threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self::from_policy(CorsPolicy::new(options))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin else {
            return CorsDecision::NotCors;
        };

        let outcome = if request.is_options() {
            self.process_preflight(origin, request)
                .map(CorsDecision::Preflight)
        } else {
            self.process_actual(origin, request).map(CorsDecision::Actual)
        };

        match outcome {
            Ok(decision) => {
                trace!(origin, method = request.method, "cors request accepted");
                decision
            }
            Err(reason) => {
                debug!(
                    origin,
                    method = request.method,
                    access_control_request_method = ?request.access_control_request_method,
                    %reason,
                    "cors request rejected"
                );
                CorsDecision::Rejected(reason)
            }
        }
    }

    fn process_preflight(
        &self,
        origin: &str,
        request: &RequestContext<'_>,
    ) -> Result<Headers, RejectionReason> {
        self.check_origin(origin)?;

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_methods_header(request)?);
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        Ok(headers.into_headers())
    }

    fn process_actual(
        &self,
        origin: &str,
        request: &RequestContext<'_>,
    ) -> Result<Headers, RejectionReason> {
        self.check_origin(origin)?;

        if !self.policy.allowed_methods.allows_method(request.method) {
            return Err(RejectionReason::MethodNotAllowed);
        }

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        Ok(headers.into_headers())
    }

    fn check_origin(&self, origin: &str) -> Result<(), RejectionReason> {
        if self.policy.allowed_origins.allows(origin) {
            Ok(())
        } else {
            Err(RejectionReason::OriginNotAllowed)
        }
    }
}

impl From<CorsPolicy> for Cors {
    fn from(policy: CorsPolicy) -> Self {
        Self::from_policy(policy)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
