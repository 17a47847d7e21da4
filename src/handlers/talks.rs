use axum::Json;
use serde_json::Value;

use crate::models::{Talk, TalkSummary};

#[utoipa::path(
    get,
    path = "/talks/new",
    tag = "talks",
    responses(
        (status = 200, description = "Blank talk with empty author and citation slots", body = Talk)
    )
)]
pub async fn new_talk() -> Json<Talk> {
    Json(Talk::default())
}

#[utoipa::path(
    post,
    path = "/talks/summary",
    tag = "talks",
    request_body = Talk,
    responses(
        (status = 200, description = "Talk without placeholder entries", body = TalkSummary),
        (status = 400, description = "Body is not JSON")
    )
)]
pub async fn summarize_talk(Json(record): Json<Value>) -> Json<TalkSummary> {
    let talk = Talk::from_object(&record);
    Json(TalkSummary::from(&talk))
}
