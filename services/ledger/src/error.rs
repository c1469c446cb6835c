use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Ledger service domain error variants.
///
/// `ExpenseNotFound`/`IncomeNotFound` cover both a missing record and one
/// owned by a different user; a caller can never tell the two apart.
#[derive(Debug, thiserror::Error)]
pub enum LedgerServiceError {
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("income not found")]
    IncomeNotFound,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl LedgerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ExpenseNotFound => "EXPENSE_NOT_FOUND",
            Self::IncomeNotFound => "INCOME_NOT_FOUND",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for LedgerServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ExpenseNotFound | Self::IncomeNotFound => StatusCode::NOT_FOUND,
            Self::NegativeAmount => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; tower-http TraceLayer records the rest.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
