use cors_gate::{CorsDecision, Headers, RejectionReason};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Actual(headers) => headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Preflight(headers) => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> RejectionReason {
    match decision {
        CorsDecision::Rejected(reason) => reason,
        other => panic!("expected rejected decision, got {:?}", other),
    }
}
