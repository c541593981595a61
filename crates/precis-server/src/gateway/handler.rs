use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{ScoreRequest, ScoreResponse};
use crate::gateway::state::HandlerState;
use crate::gateway::{PRECIS_REQUEST_ID_HEADER, PRECIS_STATUS_HEADER, PRECIS_STATUS_SCORED};

#[instrument(skip(state, payload), fields(request_id = tracing::field::Empty))]
pub async fn score_summary_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(body) = payload
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid JSON body: {}", e.body_text())))?;
    let request = parse_score_request(&body)?;

    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));
    debug!(
        context_words = precis::word_count(&request.context),
        response_words = precis::word_count(&request.student_response),
        "Scoring request accepted"
    );

    let breakdown = state.pipeline.score(&request.into()).await?;
    info!(final_score = breakdown.final_score, "Scored");

    Ok(make_response(ScoreResponse::from(breakdown), &request_id))
}

pub(crate) fn make_response(response: ScoreResponse, request_id: &str) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        PRECIS_STATUS_HEADER,
        HeaderValue::from_static(PRECIS_STATUS_SCORED),
    );
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert(PRECIS_REQUEST_ID_HEADER, value);
    }

    (StatusCode::OK, headers, Json(response)).into_response()
}

/// Checks the body shape before it reaches the pipeline.
///
/// Both fields must be present and be strings; empty strings are accepted.
pub(crate) fn parse_score_request(body: &Value) -> Result<ScoreRequest, GatewayError> {
    let object = body.as_object().ok_or_else(|| {
        GatewayError::InvalidRequest("Request body must be a JSON object".to_string())
    })?;

    Ok(ScoreRequest {
        context: string_field(object, "context")?,
        student_response: string_field(object, "student_response")?,
    })
}

fn string_field(object: &Map<String, Value>, name: &str) -> Result<String, GatewayError> {
    object
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            GatewayError::InvalidRequest(format!("Missing or invalid `{}`: expected a string", name))
        })
}
