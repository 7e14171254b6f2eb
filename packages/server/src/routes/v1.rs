use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::interval::*;
use crate::handlers::movie::*;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(movie_routes())
        .merge(producer_routes())
}

fn movie_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_movies))
        .routes(routes!(get_movie))
}

fn producer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(awards_interval_by_producer))
}
