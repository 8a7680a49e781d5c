//! Glue between the policy engine and `http` crate request/response types.
//!
//! [`Cors::handle`] runs the engine as one synchronous pipeline stage. Async
//! frameworks can use [`OwnedRequestContext`] and [`append_headers`] directly
//! around their own `next` call.

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::{CorsDecision, RejectionReason};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use thiserror::Error;
use tracing::warn;

/// Owned copy of the request fields the engine reads, extracted from `http` types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }

    pub fn from_parts(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            origin: header_line(headers, header::ORIGIN),
            access_control_request_method: header_line(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_line(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

/// All values of `name` joined with `", "`, or `None` when the header is absent.
fn header_line(headers: &HeaderMap, name: &str) -> Option<String> {
    let mut values = headers.get_all(name).iter().peekable();
    values.peek()?;

    let line = values
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ");
    Some(line)
}

/// Adds the engine's headers to `map` without replacing existing values.
///
/// Entries the `http` crate cannot represent are skipped.
pub fn append_headers(map: &mut HeaderMap, headers: &Headers) {
    for entry in headers {
        let name = match HeaderName::from_bytes(entry.name.as_bytes()) {
            Ok(name) => name,
            Err(err) => {
                warn!(header = entry.name, error = %err, "skipping invalid cors header name");
                continue;
            }
        };
        let value = match HeaderValue::from_str(&entry.value) {
            Ok(value) => value,
            Err(err) => {
                warn!(header = entry.name, error = %err, "skipping invalid cors header value");
                continue;
            }
        };
        map.append(name, value);
    }
}

/// A request refused by the policy engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(transparent)]
pub struct CorsRejection {
    #[from]
    reason: RejectionReason,
}

impl CorsRejection {
    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.reason.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
    }

    /// Plain-text client error response carrying the rejection message.
    pub fn into_response<B>(self) -> Response<B>
    where
        B: From<String>,
    {
        let mut response = Response::new(B::from(self.reason.to_string()));
        *response.status_mut() = self.status();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

impl Cors {
    /// Runs the engine as a pipeline stage in front of `next`.
    ///
    /// Rejected requests return early and `next` is never called. Every other
    /// request, preflight included, continues down the chain and the produced
    /// CORS headers are appended to the response it returns.
    pub fn handle<B, R, F>(
        &self,
        request: Request<B>,
        next: F,
    ) -> Result<Response<R>, CorsRejection>
    where
        F: FnOnce(Request<B>) -> Response<R>,
    {
        let context = OwnedRequestContext::from_request(&request);
        match self.evaluate(&context.as_request_context()) {
            CorsDecision::NotCors => Ok(next(request)),
            CorsDecision::Preflight(headers) | CorsDecision::Actual(headers) => {
                let mut response = next(request);
                append_headers(response.headers_mut(), &headers);
                Ok(response)
            }
            CorsDecision::Rejected(reason) => Err(reason.into()),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
