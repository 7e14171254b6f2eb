use serde::{Deserialize, Serialize};

use crate::entity::{movie, producer, studio};
use crate::error::AppError;

/// Page size used when `limit` is omitted.
pub const DEFAULT_LIMIT: u64 = 100;
/// Largest page a client may request.
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListQuery {
    /// Number of movies to skip, at most 2^63 - 1. Default: 0.
    pub offset: Option<u64>,
    /// Maximum number of movies to return, at most 100. Default: 100.
    pub limit: Option<u64>,
}

impl MovieListQuery {
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Largest offset the store can bind as a signed 64-bit integer.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Reject offsets above [`MAX_OFFSET`] and pages larger than [`MAX_LIMIT`]
/// instead of clamping them.
pub fn validate_movie_list_query(query: &MovieListQuery) -> Result<(), AppError> {
    if query.offset() > MAX_OFFSET {
        return Err(AppError::Validation(format!(
            "offset must be less than or equal to {MAX_OFFSET}"
        )));
    }
    if query.limit() > MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be less than or equal to {MAX_LIMIT}"
        )));
    }
    Ok(())
}

/// A producer or studio attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct RelatedEntity {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Allan Carr")]
    pub name: String,
}

impl From<producer::Model> for RelatedEntity {
    fn from(m: producer::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

impl From<studio::Model> for RelatedEntity {
    fn from(m: studio::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

/// A movie together with every studio and producer linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct MovieResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Can't Stop the Music")]
    pub title: String,
    #[schema(example = 1980)]
    pub year: i32,
    pub winner: bool,
    pub studios: Vec<RelatedEntity>,
    pub producers: Vec<RelatedEntity>,
}

impl MovieResponse {
    pub fn new(
        model: movie::Model,
        studios: Vec<RelatedEntity>,
        producers: Vec<RelatedEntity>,
    ) -> Self {
        Self {
            id: model.id,
            title: model.title,
            year: model.year,
            winner: model.winner,
            studios,
            producers,
        }
    }
}
