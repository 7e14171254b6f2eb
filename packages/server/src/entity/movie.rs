use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub title: String,
    #[sea_orm(indexed)]
    pub year: i32,
    #[sea_orm(default_value = false, indexed)]
    pub winner: bool,

    #[sea_orm(has_many, via = "movie_producer")]
    pub producers: HasMany<super::producer::Entity>,

    #[sea_orm(has_many, via = "movie_studio")]
    pub studios: HasMany<super::studio::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
