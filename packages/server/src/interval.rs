//! Minimum and maximum gaps between consecutive wins of the same producer.

use std::collections::HashMap;

use sea_orm::*;

use crate::entity::{movie, movie_producer, producer};
use crate::models::interval::{ProducerInterval, ProducerIntervalResponse};

/// Fetch `(producer name, winning year)` pairs for every winner movie,
/// ordered by producer id and then by year.
pub async fn winning_years<C: ConnectionTrait>(db: &C) -> Result<Vec<(String, i32)>, DbErr> {
    let rows = movie_producer::Entity::find()
        .select_only()
        .column(producer::Column::Name)
        .column(movie::Column::Year)
        .inner_join(movie::Entity)
        .inner_join(producer::Entity)
        .filter(movie::Column::Winner.eq(true))
        .order_by_asc(producer::Column::Id)
        .order_by_asc(movie::Column::Year)
        .into_tuple::<(String, i32)>()
        .all(db)
        .await?;

    Ok(rows)
}

/// Compute the producers whose consecutive wins are closest together and
/// furthest apart.
///
/// Years are grouped by producer name in first-seen order and sorted
/// ascending. Repeated years are kept, so a producer credited on two winners
/// of the same year yields an interval of 0. Ties keep grouping order.
pub fn producer_intervals<I>(wins: I) -> ProducerIntervalResponse
where
    I: IntoIterator<Item = (String, i32)>,
{
    let mut groups: Vec<(String, Vec<i32>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (name, year) in wins {
        match index.get(&name) {
            Some(&i) => groups[i].1.push(year),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push((name, vec![year]));
            }
        }
    }

    let mut intervals = Vec::new();
    for (producer, mut years) in groups {
        years.sort_unstable();
        for pair in years.windows(2) {
            intervals.push(ProducerInterval {
                producer: producer.clone(),
                interval: i64::from(pair[1]) - i64::from(pair[0]),
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    let (Some(min), Some(max)) = (
        intervals.iter().map(|i| i.interval).min(),
        intervals.iter().map(|i| i.interval).max(),
    ) else {
        return ProducerIntervalResponse::default();
    };

    ProducerIntervalResponse {
        min: intervals
            .iter()
            .filter(|i| i.interval == min)
            .cloned()
            .collect(),
        max: intervals
            .into_iter()
            .filter(|i| i.interval == max)
            .collect(),
    }
}
