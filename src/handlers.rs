use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    errors::ApiError,
    models::{NewPerson, Person},
    state::AppState,
};

fn person_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidId(rejection.body_text()))
}

fn body_error(rejection: JsonRejection) -> ApiError {
    // body-limit rejections keep their 413; everything else is a malformed request
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(rejection.body_text())
    } else {
        ApiError::InvalidBody(rejection.body_text())
    }
}

fn payload(body: Result<Json<NewPerson>, JsonRejection>) -> Result<NewPerson, ApiError> {
    let Json(new) = body.map_err(body_error)?;
    new.validate()?;
    Ok(new)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[tracing::instrument(skip_all)]
pub async fn list_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    let people = state.store.list().await;
    tracing::debug!(count = people.len(), "listed people");
    Json(people)
}

#[tracing::instrument(skip_all)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let id = person_id(path)?;
    let person = state.store.get(id).await?;
    Ok(Json(person))
}

#[tracing::instrument(skip_all)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let new = payload(body)?;
    let person = state.store.create(new).await;
    state.people_created.add(1, &[]);
    tracing::info!(id = person.id, "person created");
    Ok((StatusCode::CREATED, Json(person)))
}

#[tracing::instrument(skip_all)]
pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let id = person_id(path)?;
    let new = payload(body)?;
    let person = state.store.update(id, new).await?;
    tracing::info!(id, "person updated");
    Ok(Json(person))
}

#[tracing::instrument(skip_all)]
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = person_id(path)?;
    state.store.delete(id).await?;
    state.people_deleted.add(1, &[]);
    tracing::info!(id, "person deleted");
    Ok(StatusCode::NO_CONTENT)
}
