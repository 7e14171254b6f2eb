use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::interval::{producer_intervals, winning_years};
use crate::models::interval::ProducerIntervalResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/awards-interval-by-producer",
    tag = "Producers",
    operation_id = "awardsIntervalByProducer",
    summary = "Shortest and longest gaps between wins",
    description = "For every producer with two or more wins, computes the gap in years between consecutive wins and returns the intervals equal to the overall minimum and maximum. Both lists are empty when no producer has won twice.",
    responses(
        (status = 200, description = "Minimum and maximum intervals", body = ProducerIntervalResponse),
        (status = 500, description = "Database failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn awards_interval_by_producer(
    State(state): State<AppState>,
) -> Result<Json<ProducerIntervalResponse>, AppError> {
    let wins = winning_years(&state.db).await?;
    Ok(Json(producer_intervals(wins)))
}
