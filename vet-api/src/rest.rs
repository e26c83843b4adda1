//! HTTP layer for the clinic: handlers and the API router.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::domain::{AnimalData, VisitData};
use crate::storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
}

impl AppState {
    /// Create new application state around the given store
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// Build the `/api` router
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/animals", get(get_animals).post(add_animal))
        .route(
            "/animals/:id",
            get(get_animal_by_id).put(replace_animal).delete(remove_animal),
        )
        .route(
            "/animals/:id/visits",
            get(get_animal_visits).post(add_animal_visit),
        )
}

/// Query parameters for the animal list endpoint
#[derive(Deserialize, Debug)]
pub struct AnimalListQuery {
    /// Full-name match, ignoring case
    pub name: Option<String>,
}

/// Axum handler function for GET /api/animals
pub async fn get_animals(
    State(state): State<AppState>,
    Query(query): Query<AnimalListQuery>,
) -> impl IntoResponse {
    info!("GET /api/animals - query: {:?}", query);

    let mut animals = state.store.list_animals();
    if let Some(name) = query.name {
        animals.retain(|a| a.name.eq_ignore_ascii_case(&name));
    }

    (StatusCode::OK, Json(animals))
}

/// Axum handler function for GET /api/animals/:id
pub async fn get_animal_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/animals/{}", id);

    match state.store.get_animal(id) {
        Some(animal) => (StatusCode::OK, Json(animal)).into_response(),
        None => (StatusCode::NOT_FOUND, "Animal with given id does not exist").into_response(),
    }
}

/// Axum handler function for POST /api/animals
pub async fn add_animal(
    State(state): State<AppState>,
    Json(data): Json<AnimalData>,
) -> impl IntoResponse {
    info!("POST /api/animals - request: {:?}", data);

    let animal = state.store.add_animal(data);
    (StatusCode::CREATED, Json(animal))
}

/// Axum handler function for PUT /api/animals/:id
pub async fn replace_animal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AnimalData>,
) -> impl IntoResponse {
    info!("PUT /api/animals/{} - request: {:?}", id, data);

    if state.store.replace_animal(id, data) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Animal with given id does not exist").into_response()
    }
}

/// Axum handler function for DELETE /api/animals/:id
pub async fn remove_animal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/animals/{}", id);

    if state.store.remove_animal(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Animal with given id does not exist").into_response()
    }
}

/// Axum handler function for GET /api/animals/:id/visits
pub async fn get_animal_visits(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/animals/{}/visits", id);

    match state.store.visits_for(id) {
        Some(visits) => (StatusCode::OK, Json(visits)).into_response(),
        None => (StatusCode::NOT_FOUND, "Animal with given id does not exist").into_response(),
    }
}

/// Axum handler function for POST /api/animals/:id/visits
pub async fn add_animal_visit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<VisitData>,
) -> impl IntoResponse {
    info!("POST /api/animals/{}/visits - request: {:?}", id, data);

    match state.store.add_visit(id, data) {
        Some(visit) => (StatusCode::CREATED, Json(visit)).into_response(),
        None => (StatusCode::NOT_FOUND, "Animal with given id does not exist").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    /// Helper to create test state with the sample animals
    fn setup_test() -> AppState {
        AppState::new(MemoryStore::with_sample_data())
    }

    #[tokio::test]
    async fn test_get_animals_filter_matches_ignoring_case() {
        let state = setup_test();

        let response = get_animals(
            State(state.clone()),
            Query(AnimalListQuery {
                name: Some("pimpek".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        // The filter is an exact-name match, so the store must still
        // hold an animal by that name for it to be the one returned
        let matches: Vec<_> = state
            .store
            .list_animals()
            .into_iter()
            .filter(|a| a.name.eq_ignore_ascii_case("pimpek"))
            .collect();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_get_animal_by_id_handles_unknown_ids() {
        let state = setup_test();

        let found = get_animal_by_id(State(state.clone()), Path(1)).await.into_response();
        assert_eq!(found.status(), StatusCode::OK);

        let missing = get_animal_by_id(State(state), Path(999)).await.into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_animal_returns_created() {
        let state = setup_test();

        let response = add_animal(
            State(state.clone()),
            Json(AnimalData {
                name: "Rex".to_string(),
                category: "Dog".to_string(),
                coat_color: "brown".to_string(),
                weight: 30.0,
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.store.list_animals().len(), 3);
    }

    #[tokio::test]
    async fn test_replace_and_remove_report_missing_animals() {
        let state = setup_test();

        let data = AnimalData {
            name: "Ghost".to_string(),
            category: "Cat".to_string(),
            coat_color: "white".to_string(),
            weight: 3.0,
        };
        let replaced = replace_animal(State(state.clone()), Path(999), Json(data))
            .await
            .into_response();
        assert_eq!(replaced.status(), StatusCode::NOT_FOUND);

        let removed = remove_animal(State(state.clone()), Path(2)).await.into_response();
        assert_eq!(removed.status(), StatusCode::NO_CONTENT);

        let removed_again = remove_animal(State(state), Path(2)).await.into_response();
        assert_eq!(removed_again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_visit_endpoints_check_the_animal_first() {
        let state = setup_test();

        let listed = get_animal_visits(State(state.clone()), Path(1)).await.into_response();
        assert_eq!(listed.status(), StatusCode::OK);

        let missing = get_animal_visits(State(state.clone()), Path(999))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let data = VisitData {
            date: Utc::now(),
            description: "Checkup".to_string(),
            price: 75.0,
        };
        let created = add_animal_visit(State(state.clone()), Path(2), Json(data.clone()))
            .await
            .into_response();
        assert_eq!(created.status(), StatusCode::CREATED);

        let rejected = add_animal_visit(State(state), Path(999), Json(data))
            .await
            .into_response();
        assert_eq!(rejected.status(), StatusCode::NOT_FOUND);
    }
}
