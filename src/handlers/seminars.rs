use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::app::AppState;
use crate::models::{now_iso, Seminar, SeminarSummary};

#[derive(Debug, Deserialize, IntoParams)]
pub struct NewSeminarQuery {
    /// Running number of the session (default: 0)
    pub index_number: Option<i64>,
    /// ISO-8601 start time (default: now)
    pub time: Option<String>,
}

#[utoipa::path(
    get,
    path = "/seminars/new",
    tag = "seminars",
    params(NewSeminarQuery),
    responses(
        (status = 200, description = "Blank seminar ready to be filled in", body = Seminar)
    )
)]
pub async fn new_seminar(
    State(state): State<AppState>,
    Query(query): Query<NewSeminarQuery>,
) -> Json<Seminar> {
    let seminar = Seminar::new(
        query.index_number.unwrap_or(0),
        query.time.unwrap_or_else(now_iso),
        Vec::new(),
        state.config.default_room.clone(),
        "",
    );
    Json(seminar)
}

#[utoipa::path(
    post,
    path = "/seminars/normalize",
    tag = "seminars",
    request_body = Seminar,
    responses(
        (status = 200, description = "Seminar rebuilt from the submitted record", body = Seminar),
        (status = 400, description = "Body is not JSON")
    )
)]
pub async fn normalize_seminar(Json(record): Json<Value>) -> Json<Seminar> {
    Json(Seminar::from_object(&record))
}

#[utoipa::path(
    post,
    path = "/seminars/summary",
    tag = "seminars",
    request_body = Seminar,
    responses(
        (status = 200, description = "Derived view of the submitted seminar", body = SeminarSummary),
        (status = 400, description = "Body is not JSON")
    )
)]
pub async fn summarize_seminar(Json(record): Json<Value>) -> Json<SeminarSummary> {
    let seminar = Seminar::from_object(&record);
    tracing::debug!(
        "Summarizing seminar #{} with {} real talk(s)",
        seminar.index_number,
        seminar.real_talks().len()
    );
    Json(SeminarSummary::from(&seminar))
}
