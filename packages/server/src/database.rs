use std::time::Duration;

use sea_orm::sea_query::Table;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{movie, movie_producer, movie_studio, producer, studio};

/// Open the pool and rebuild the schema from the entity definitions.
///
/// The store only ever mirrors the CSV, so tables left over from a previous
/// run are dropped before the schema is synced.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    drop_tables(&db).await?;
    db.get_schema_registry("awards_server::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Drop every table owned by the service, link tables first.
pub async fn drop_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let statements = [
        Table::drop()
            .table(movie_producer::Entity)
            .if_exists()
            .to_owned(),
        Table::drop()
            .table(movie_studio::Entity)
            .if_exists()
            .to_owned(),
        Table::drop().table(movie::Entity).if_exists().to_owned(),
        Table::drop().table(producer::Entity).if_exists().to_owned(),
        Table::drop().table(studio::Entity).if_exists().to_owned(),
    ];

    for stmt in &statements {
        db.execute_raw(backend.build(stmt)).await?;
    }

    info!("Dropped movie tables");
    Ok(())
}
