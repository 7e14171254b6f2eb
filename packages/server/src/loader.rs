//! One-shot import of the nominee list into the relational store.
//!
//! The CSV is parsed completely before anything is written, so a malformed row
//! aborts startup without touching the database. Rows are then written in a
//! single transaction.

use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sea_orm::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::entity::{movie, movie_producer, movie_studio, producer, studio};

static NAME_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*|\s+and\s+").expect("name separator pattern is valid"));

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed movie list: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: year {value:?} is not a number")]
    InvalidYear { line: u64, value: String },
}

/// What happened to the import. Only [`LoadError`] is fatal.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The CSV file does not exist; nothing was written.
    SourceMissing,
    Loaded(LoadSummary),
    /// The insert transaction failed and was rolled back.
    InsertFailed(DbErr),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub movies: usize,
    /// Producers created by this import (existing names are reused).
    pub producers: usize,
    /// Studios created by this import (existing names are reused).
    pub studios: usize,
}

/// A CSV row after name splitting and type conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
    pub winner: bool,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: String,
    title: String,
    studios: String,
    producers: String,
    #[serde(default)]
    winner: String,
}

/// Split a multi-name field such as `"A, B and C"` into its names.
///
/// Every lowercase `and` is also removed from inside each name, so
/// `"Sandra Adair"` comes out as `"Sr Adair"`. Existing data depends on this.
/// Names left empty are dropped.
pub fn split_names(names: &str) -> Vec<String> {
    NAME_SEPARATOR
        .split(names)
        .map(|name| name.trim().replace("and", ""))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parse the semicolon-delimited nominee list.
///
/// Columns are matched by header name; unknown trailing columns are ignored.
/// A movie is a winner only when its `winner` column is exactly `yes`.
pub fn parse_movie_list<R: Read>(reader: R) -> Result<Vec<MovieRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvRow = record.deserialize(Some(&headers))?;

        let year = row
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| LoadError::InvalidYear {
                line,
                value: row.year.clone(),
            })?;

        records.push(MovieRecord {
            year,
            title: row.title,
            studios: split_names(&row.studios),
            producers: split_names(&row.producers),
            winner: row.winner == "yes",
        });
    }

    Ok(records)
}

/// Write all records and their relations in one transaction.
///
/// Producers and studios are looked up by exact name before being created, and
/// the lookup sees rows created earlier in the same transaction.
pub async fn store_movies<C: TransactionTrait>(
    db: &C,
    records: &[MovieRecord],
) -> Result<LoadSummary, DbErr> {
    let txn = db.begin().await?;
    let mut summary = LoadSummary::default();

    for record in records {
        let mut studio_ids = Vec::with_capacity(record.studios.len());
        for name in &record.studios {
            let (id, created) = get_or_create_studio(&txn, name).await?;
            if created {
                summary.studios += 1;
            }
            if !studio_ids.contains(&id) {
                studio_ids.push(id);
            }
        }

        let mut producer_ids = Vec::with_capacity(record.producers.len());
        for name in &record.producers {
            let (id, created) = get_or_create_producer(&txn, name).await?;
            if created {
                summary.producers += 1;
            }
            if !producer_ids.contains(&id) {
                producer_ids.push(id);
            }
        }

        let model = movie::ActiveModel {
            title: Set(record.title.clone()),
            year: Set(record.year),
            winner: Set(record.winner),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for studio_id in studio_ids {
            movie_studio::Entity::insert(movie_studio::ActiveModel {
                movie_id: Set(model.id),
                studio_id: Set(studio_id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        for producer_id in producer_ids {
            movie_producer::Entity::insert(movie_producer::ActiveModel {
                movie_id: Set(model.id),
                producer_id: Set(producer_id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        summary.movies += 1;
    }

    txn.commit().await?;
    Ok(summary)
}

/// Import the CSV at `path`.
///
/// A missing file and a failed insert are reported through [`LoadOutcome`];
/// an unreadable or malformed file is an error.
#[instrument(skip(db, path), fields(path = %path.as_ref().display()))]
pub async fn load_csv_data<C: TransactionTrait>(
    db: &C,
    path: impl AsRef<Path>,
) -> Result<LoadOutcome, LoadError> {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Movie list not found, skipping import");
            return Ok(LoadOutcome::SourceMissing);
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let records = parse_movie_list(bytes.as_slice())?;

    match store_movies(db, &records).await {
        Ok(summary) => {
            info!(
                movies = summary.movies,
                producers = summary.producers,
                studios = summary.studios,
                "Movies imported"
            );
            Ok(LoadOutcome::Loaded(summary))
        }
        Err(e) => {
            error!("Failed to import movie list: {}", e);
            Ok(LoadOutcome::InsertFailed(e))
        }
    }
}

async fn get_or_create_studio(txn: &impl ConnectionTrait, name: &str) -> Result<(i32, bool), DbErr> {
    if let Some(existing) = studio::Entity::find()
        .filter(studio::Column::Name.eq(name))
        .one(txn)
        .await?
    {
        return Ok((existing.id, false));
    }

    let model = studio::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(txn)
    .await?;
    Ok((model.id, true))
}

async fn get_or_create_producer(
    txn: &impl ConnectionTrait,
    name: &str,
) -> Result<(i32, bool), DbErr> {
    if let Some(existing) = producer::Entity::find()
        .filter(producer::Column::Name.eq(name))
        .one(txn)
        .await?
    {
        return Ok((existing.id, false));
    }

    let model = producer::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(txn)
    .await?;
    Ok((model.id, true))
}
