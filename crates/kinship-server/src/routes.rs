//! Route table and handlers.
//!
//! # Endpoints
//!
//! - `GET /` - HTML overview of everyone and of isolated people
//! - `POST /add_person` - Create a person
//! - `POST /add_child` - Create a child if needed and link it to an existing parent
//! - `POST /add_relationship` - Link two people by name
//! - `DELETE /delete_person/{name}` - Delete a person and their edges
//! - `GET /get_family_tree` - Node/link payload for the tree renderer
//! - `GET /search_person?name=` - Case-insensitive name search

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, Method},
    response::{Html, Json},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use kinship_core::{FamilyTree, Person};
use kinship_graph::FamilyStore;

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::page;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FamilyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FamilyStore>) -> Self {
        Self { store }
    }
}

// ── Inputs & Outputs ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddPersonInput {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddChildInput {
    pub parent: Option<String>,
    pub child: Option<String>,
    pub gender: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRelationshipInput {
    pub parent: Option<String>,
    pub child: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    fn success() -> Json<Self> {
        Json(Self {
            status: "success".to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Person>,
}

/// Treat absent and empty fields alike.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

// ── Router ────────────────────────────────────────────────────────

/// Build the application router.
///
/// `cors_origins` lists allowed origins; an empty list allows any origin.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add_person", post(add_person))
        .route("/add_child", post(add_child))
        .route("/add_relationship", post(add_relationship))
        .route("/delete_person/{name}", delete(delete_person))
        .route("/get_family_tree", get(get_family_tree))
        .route("/search_person", get(search_person))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    // Invalid entries are dropped, never widened to any origin.
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(parsed)
}

// ── Handlers ──────────────────────────────────────────────────────

async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let people = state.store.all_people().await?;
    let isolated = state.store.isolated_people().await?;
    Ok(Html(page::render_index(&people, &isolated)))
}

async fn add_person(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<AddPersonInput>,
) -> Result<Json<StatusResponse>, ApiError> {
    let (Some(name), Some(gender)) = (present(input.name), present(input.gender)) else {
        return Err(ApiError::Validation(
            "Name and gender are required".to_string(),
        ));
    };

    let person = Person::new(name, gender, input.description.unwrap_or_default());
    state.store.create_person(&person).await?;
    tracing::info!(name = %person.name, "Person added");

    Ok(StatusResponse::success())
}

async fn add_child(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<AddChildInput>,
) -> Result<Json<StatusResponse>, ApiError> {
    let parent = input.parent.unwrap_or_default();
    if !state.store.person_exists(&parent).await? {
        return Err(ApiError::Validation(format!(
            "Parent '{parent}' does not exist."
        )));
    }

    let child = present(input.child)
        .ok_or_else(|| ApiError::Validation("Child is required".to_string()))?;

    if !state.store.person_exists(&child).await? {
        let person = Person::new(
            child.as_str(),
            input.gender.unwrap_or_default(),
            input.desc.unwrap_or_default(),
        );
        state.store.create_person(&person).await?;
        tracing::info!(name = %child, "Child created");
    }

    state.store.create_relationship(&parent, &child).await?;
    tracing::info!(%parent, %child, "Child linked to parent");

    Ok(StatusResponse::success())
}

/// Neither endpoint is checked; a missing one means no edge is created and
/// the caller still gets a success response.
async fn add_relationship(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<AddRelationshipInput>,
) -> Result<Json<StatusResponse>, ApiError> {
    let (Some(parent), Some(child)) = (present(input.parent), present(input.child)) else {
        return Err(ApiError::Validation(
            "Parent and child are required".to_string(),
        ));
    };

    state.store.create_relationship(&parent, &child).await?;
    tracing::info!(%parent, %child, "Relationship requested");

    Ok(StatusResponse::success())
}

async fn delete_person(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    if !state.store.person_exists(&name).await? {
        return Err(ApiError::NotFound(format!(
            "Person '{name}' does not exist."
        )));
    }

    state.store.delete_person(&name).await?;
    tracing::info!(%name, "Person deleted");

    Ok(StatusResponse::success())
}

async fn get_family_tree(State(state): State<AppState>) -> Result<Json<FamilyTree>, ApiError> {
    let edges = state.store.family_tree().await?;
    let people = state.store.all_people().await?;
    Ok(Json(FamilyTree::assemble(people, edges)))
}

async fn search_person(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state.store.search_people(&params.name).await?;
    Ok(Json(SearchResponse { results }))
}
