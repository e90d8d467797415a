use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use homebid_core::offer::OfferSubmission;
use homebid_core::stats::{self, OfferStatistics};

use crate::error::AppError;
use crate::state::AppState;

/// GET /
pub async fn index() -> &'static str {
    "Welcome to the Real Estate Offer Submission API"
}

/// POST /submit_offer
/// Parse the payload, classify it, and persist it. Offers that fail the
/// sanity rule are stored as invalid; only a missing body or a missing
/// field rejects the submission outright.
pub async fn submit_offer(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(data) = payload.map_err(|_| AppError::NoInput)?;
    // Anything other than a non-empty JSON object carries no usable input:
    // null, {}, [], "" and bare scalars all classify the same way.
    if data.as_object().map_or(true, |fields| fields.is_empty()) {
        return Err(AppError::NoInput);
    }

    let submission = parse_submission(&data)?;
    let id = state
        .store
        .create(submission)
        .await
        .map_err(AppError::Submission)?;
    tracing::debug!(%id, "offer stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Offer submitted successfully!"})),
    ))
}

/// GET /offer_statistics
/// Recomputed from the full offer set on every request.
pub async fn offer_statistics(
    State(state): State<AppState>,
) -> Result<Json<OfferStatistics>, AppError> {
    let offers = state
        .store
        .list_all()
        .await
        .map_err(|err| AppError::Internal(err.into()))?;

    Ok(Json(stats::aggregate(&offers)))
}

fn parse_submission(data: &Value) -> Result<OfferSubmission, AppError> {
    // Fields are checked in payload order; the first missing one names the
    // 400 response.
    Ok(OfferSubmission {
        realtor_name: field(data, "realtor_name")?
            .as_str()
            .ok_or(AppError::InvalidField("realtor_name"))?
            .to_string(),
        offer_amount: field(data, "offer_amount")?
            .as_f64()
            .ok_or(AppError::InvalidField("offer_amount"))?,
        is_cash: field(data, "is_cash")?
            .as_bool()
            .ok_or(AppError::InvalidField("is_cash"))?,
        contingencies: field(data, "contingencies")?
            .as_str()
            .ok_or(AppError::InvalidField("contingencies"))?
            .to_string(),
        closing_time: field(data, "closing_time")?
            .as_i64()
            .ok_or(AppError::InvalidField("closing_time"))?,
    })
}

fn field<'a>(data: &'a Value, name: &'static str) -> Result<&'a Value, AppError> {
    data.get(name).ok_or(AppError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_complete_payload() {
        let data = json!({
            "realtor_name": "A",
            "offer_amount": 600000,
            "is_cash": true,
            "contingencies": "none",
            "closing_time": 30
        });
        let submission = parse_submission(&data).unwrap();
        assert_eq!(submission.realtor_name, "A");
        assert_eq!(submission.offer_amount, 600_000.0);
        assert!(submission.is_cash);
        assert_eq!(submission.closing_time, 30);
    }

    #[test]
    fn test_parse_submission_reports_first_missing_field() {
        let data = json!({"realtor_name": "A"});
        match parse_submission(&data) {
            Err(AppError::MissingField(name)) => assert_eq!(name, "offer_amount"),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_submission_rejects_wrong_type() {
        let data = json!({
            "realtor_name": "A",
            "offer_amount": "a lot",
            "is_cash": true,
            "contingencies": "none",
            "closing_time": 30
        });
        match parse_submission(&data) {
            Err(AppError::InvalidField(name)) => assert_eq!(name, "offer_amount"),
            other => panic!("expected invalid field, got {other:?}"),
        }
    }
}
