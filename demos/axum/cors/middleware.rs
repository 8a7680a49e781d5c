use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use cors_gate::{CorsDecision, CorsRejection, OwnedRequestContext, append_headers};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.evaluate(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::NotCors => next.run(request).await,
        CorsDecision::Preflight(headers) | CorsDecision::Actual(headers) => {
            let mut response = next.run(request).await;
            append_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::Rejected(reason) => CorsRejection::from(reason).into_response::<Body>(),
    }
}
