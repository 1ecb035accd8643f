use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

use super::domain::LeadId;
use super::filters::LeadFilters;
use super::form::LeadForm;
use super::qualification::{
    BantDimension, BonusRule, ColorBand, QualificationInputs, ScoreBreakdown, ScoreTier,
    TableEntry, MAX_SCORE,
};
use super::repository::{LeadPageView, LeadRepository, RepositoryError};
use super::service::{LeadIntakeService, LeadServiceError};
use super::validation::{validate_on_blur, FieldErrorView, FormField};

/// Router builder exposing lead intake, listing, and scoring endpoints.
pub fn lead_router<R>(service: Arc<LeadIntakeService<R>>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/leads",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/leads/score", post(score_handler::<R>))
        .route("/api/v1/leads/validate", post(validate_handler))
        .route("/api/v1/leads/qualification/options", get(options_handler))
        .route("/api/v1/leads/:lead_id", get(status_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Json(form): Json<LeadForm>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.submit(form) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(LeadServiceError::Validation(errors)) => {
            let payload = json!({
                "error": errors.to_string(),
                "fields": errors.view(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(LeadServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "lead already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
{
    let id = LeadId(lead_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "lead not found",
                "leadId": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LeadPageView>, AppError>
where
    R: LeadRepository + 'static,
{
    let filters = LeadFilters::from_query(&params)?;
    let page = service.list(filters)?;
    Ok(Json(page.view()))
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Json(inputs): Json<QualificationInputs>,
) -> Json<ScoreBreakdown>
where
    R: LeadRepository + 'static,
{
    Json(service.preview(&inputs))
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldValidationRequest {
    pub(crate) field: FormField,
    #[serde(default)]
    pub(crate) value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldValidationResponse {
    pub(crate) field: FormField,
    pub(crate) valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<FieldErrorView>,
}

pub(crate) async fn validate_handler(
    Json(request): Json<FieldValidationRequest>,
) -> Json<FieldValidationResponse> {
    let error = validate_on_blur(request.field, &request.value);
    Json(FieldValidationResponse {
        field: request.field,
        valid: error.is_none(),
        error: error.map(FieldErrorView::from),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QualificationOptions {
    pub(crate) budget: Vec<TableEntry>,
    pub(crate) authority: Vec<TableEntry>,
    pub(crate) need: Vec<TableEntry>,
    pub(crate) timeline: Vec<TableEntry>,
    pub(crate) bonuses: Vec<BonusOption>,
    pub(crate) tiers: Vec<TierOption>,
    pub(crate) max_score: u16,
}

#[derive(Debug, Serialize)]
pub(crate) struct BonusOption {
    pub(crate) rule: BonusRule,
    pub(crate) points: u16,
    pub(crate) description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TierOption {
    pub(crate) tier: ScoreTier,
    pub(crate) min_score: u16,
    pub(crate) label: &'static str,
    pub(crate) label_ar: &'static str,
    pub(crate) color: ColorBand,
}

pub(crate) async fn options_handler() -> Json<QualificationOptions> {
    Json(QualificationOptions {
        budget: BantDimension::Budget.options(),
        authority: BantDimension::Authority.options(),
        need: BantDimension::Need.options(),
        timeline: BantDimension::Timeline.options(),
        bonuses: BonusRule::all()
            .into_iter()
            .map(|rule| BonusOption {
                rule,
                points: rule.points(),
                description: rule.description(),
            })
            .collect(),
        tiers: ScoreTier::ordered()
            .into_iter()
            .map(|tier| TierOption {
                tier,
                min_score: tier.min_score(),
                label: tier.label(),
                label_ar: tier.label_ar(),
                color: tier.color(),
            })
            .collect(),
        max_score: MAX_SCORE,
    })
}
