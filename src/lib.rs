mod allowed_headers;
mod allowed_methods;
mod case;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod pipeline;
mod policy;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::{Header, Headers};
pub use options::CorsOptions;
pub use origin::AllowedOrigins;
pub use pipeline::{CorsRejection, OwnedRequestContext, append_headers};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, RejectionReason};
