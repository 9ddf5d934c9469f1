use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use spinner_catalog::{require_country, require_destination, CatalogFilter, Country, Destination};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/countries", get(list_countries))
        .route("/v1/countries/{code}", get(get_country))
        .route("/v1/destinations", get(list_destinations))
        .route("/v1/destinations/{id}", get(get_destination))
}

async fn list_countries(Query(filter): Query<CatalogFilter>) -> Json<ListResponse<&'static Country>> {
    Json(filter.filter_countries().into())
}

async fn get_country(Path(code): Path<String>) -> Result<Json<&'static Country>, AppError> {
    Ok(Json(require_country(&code)?))
}

async fn list_destinations(Query(filter): Query<CatalogFilter>) -> Json<ListResponse<&'static Destination>> {
    Json(filter.filter_destinations().into())
}

async fn get_destination(Path(id): Path<String>) -> Result<Json<&'static Destination>, AppError> {
    Ok(Json(require_destination(&id)?))
}
