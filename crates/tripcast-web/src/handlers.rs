use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use tripcast_core::{Destination, ValidationError, Verdict, VerdictReport};

use crate::error::ApiError;
use crate::AppState;

/// Temperature as it arrives on the wire: a JSON number, or a numeric
/// string the boundary coerces. Anything else is rejected here, before the
/// service sees it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TemperatureField {
    Number(f64),
    Text(String),
}

impl TemperatureField {
    fn resolve(&self) -> Result<f64, ValidationError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                ValidationError::TemperatureNotNumeric {
                    value: text.clone(),
                }
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateDestinationRequest {
    name: Option<String>,
    temperature: Option<TemperatureField>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateTemperatureRequest {
    destination_name: Option<String>,
    new_temperature: Option<TemperatureField>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DestinationQuery {
    destination: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerdictResponse {
    current_temperature: f64,
    ideal_temperature: f64,
    verdict: Verdict,
}

impl From<VerdictReport> for VerdictResponse {
    fn from(report: VerdictReport) -> Self {
        Self {
            current_temperature: report.current_temperature.value(),
            ideal_temperature: report.ideal_temperature.value(),
            verdict: report.verdict,
        }
    }
}

fn parsed<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(inner)| inner)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

pub(crate) async fn create_destination(
    State(state): State<AppState>,
    body: Result<Json<CreateDestinationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Destination>), ApiError> {
    let body = parsed(body)?;

    let name = body
        .name
        .ok_or(ValidationError::MissingField { field: "name" })?;
    let temperature = body
        .temperature
        .ok_or(ValidationError::MissingField {
            field: "temperature",
        })?
        .resolve()?;

    let created = state.service.create(&name, temperature).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn delete_destination(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&name).await?;
    Ok(Json(MessageResponse {
        message: String::from("destination deleted"),
    }))
}

pub(crate) async fn update_destination_temperature(
    State(state): State<AppState>,
    body: Result<Json<UpdateTemperatureRequest>, JsonRejection>,
) -> Result<Json<Destination>, ApiError> {
    let body = parsed(body)?;

    let name = body.destination_name.ok_or(ValidationError::MissingField {
        field: "destination_name",
    })?;
    let temperature = body
        .new_temperature
        .ok_or(ValidationError::MissingField {
            field: "new_temperature",
        })?
        .resolve()?;

    let updated = state.service.update_temperature(&name, temperature).await?;
    Ok(Json(updated))
}

pub(crate) async fn get_destination(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> Result<Json<Destination>, ApiError> {
    // An absent query parameter matches nothing, which is a 404 rather than
    // a validation failure on this endpoint.
    let name = query.destination.unwrap_or_default();
    let destination = state.service.get_by_name(&name).await?;
    Ok(Json(destination))
}

pub(crate) async fn fetch_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    let destinations = state.service.list_all().await?;
    Ok(Json(destinations))
}

pub(crate) async fn get_verdict(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> Result<Json<VerdictResponse>, ApiError> {
    let name = query.destination.unwrap_or_default();
    let report = state.service.verdict(&name).await?;
    Ok(Json(VerdictResponse::from(report)))
}
