use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::movie::*;
use crate::state::AppState;
use crate::utils::movie::{find_movie, list_movie_page, movie_with_relations, with_relations};

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    operation_id = "listMovies",
    summary = "List movies",
    description = "Returns movies in the order they appear in the nominee list, each with its studios and producers. `limit` above 100 is rejected rather than clamped.",
    params(MovieListQuery),
    responses(
        (status = 200, description = "Page of movies", body = Vec<MovieResponse>),
        (status = 400, description = "Invalid offset or limit (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MovieListQuery>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    validate_movie_list_query(&query)?;

    let movies = list_movie_page(&state.db, query.offset(), query.limit()).await?;
    let data = with_relations(&state.db, movies).await?;

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    operation_id = "getMovie",
    summary = "Get a movie by ID",
    description = "Returns a single movie with its studios and producers.",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Movie not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MovieResponse>, AppError> {
    let model = find_movie(&state.db, id).await?;
    let data = movie_with_relations(&state.db, model).await?;

    Ok(Json(data))
}
