use std::collections::HashMap;

use sea_orm::*;

use crate::entity::{movie, movie_producer, movie_studio, producer, studio};
use crate::error::AppError;
use crate::models::movie::{MovieResponse, RelatedEntity};

/// Look up a movie by ID, returning 404 if not found.
pub async fn find_movie<C: ConnectionTrait>(db: &C, id: i32) -> Result<movie::Model, AppError> {
    movie::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".into()))
}

/// Fetch one page of movies in insertion order.
pub async fn list_movie_page<C: ConnectionTrait>(
    db: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<movie::Model>, DbErr> {
    movie::Entity::find()
        .order_by_asc(movie::Column::Id)
        .offset(Some(offset))
        .limit(Some(limit))
        .all(db)
        .await
}

/// Studios and producers of a set of movies, keyed by movie ID.
#[derive(Default)]
struct Relations {
    studios: HashMap<i32, Vec<RelatedEntity>>,
    producers: HashMap<i32, Vec<RelatedEntity>>,
}

impl Relations {
    fn attach(&mut self, model: movie::Model) -> MovieResponse {
        let studios = self.studios.remove(&model.id).unwrap_or_default();
        let producers = self.producers.remove(&model.id).unwrap_or_default();
        MovieResponse::new(model, studios, producers)
    }
}

/// One query per relation. Related rows are ordered by their own ID.
async fn load_relations<C: ConnectionTrait>(db: &C, ids: Vec<i32>) -> Result<Relations, DbErr> {
    let mut relations = Relations::default();

    let studio_rows = movie_studio::Entity::find()
        .filter(movie_studio::Column::MovieId.is_in(ids.clone()))
        .find_also_related(studio::Entity)
        .order_by_asc(movie_studio::Column::StudioId)
        .all(db)
        .await?;
    for (link, related) in studio_rows {
        if let Some(s) = related {
            relations
                .studios
                .entry(link.movie_id)
                .or_default()
                .push(s.into());
        }
    }

    let producer_rows = movie_producer::Entity::find()
        .filter(movie_producer::Column::MovieId.is_in(ids))
        .find_also_related(producer::Entity)
        .order_by_asc(movie_producer::Column::ProducerId)
        .all(db)
        .await?;
    for (link, related) in producer_rows {
        if let Some(p) = related {
            relations
                .producers
                .entry(link.movie_id)
                .or_default()
                .push(p.into());
        }
    }

    Ok(relations)
}

/// Attach studios and producers to each movie of a page, eagerly.
pub async fn with_relations<C: ConnectionTrait>(
    db: &C,
    movies: Vec<movie::Model>,
) -> Result<Vec<MovieResponse>, DbErr> {
    if movies.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = movies.iter().map(|m| m.id).collect();
    let mut relations = load_relations(db, ids).await?;

    Ok(movies
        .into_iter()
        .map(|m| relations.attach(m))
        .collect())
}

/// Attach studios and producers to a single movie.
pub async fn movie_with_relations<C: ConnectionTrait>(
    db: &C,
    model: movie::Model,
) -> Result<MovieResponse, DbErr> {
    let mut relations = load_relations(db, vec![model.id]).await?;
    Ok(relations.attach(model))
}
