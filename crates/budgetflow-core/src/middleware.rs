use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

/// Header carrying the per-request correlation id through both BudgetFlow
/// services. The JSON trace output records it, so one id follows a request
/// from the auth login all the way into a ledger write.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Stamps each incoming request with a fresh uuid v4.
#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        // A uuid string is always a valid header value.
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Build the request-id layer. Routers apply it after `TraceLayer` so the
/// id is present on every traced request.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(
        axum::http::HeaderName::from_static(X_REQUEST_ID),
        MakeUuidRequestId,
    )
}
