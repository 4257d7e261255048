use std::sync::Arc;

use agenda_core::client::{RateRequest, SessionQuery};
use agenda_core::models::{Location, SessionView, Speaker};
use agenda_core::ratings::{RatingStore, RatingSummary};
use agenda_core::{Catalog, SearchQuery, SessionFilter};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    catalog: Arc<Catalog>,
    ratings: Arc<RatingStore>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let catalog = Catalog::load(&config.data_path).map_err(|error| {
            AppError::Config(format!(
                "failed to load dataset {}: {error}",
                config.data_path.display()
            ))
        })?;
        Ok(Self::new(config, catalog))
    }

    pub fn new(config: Arc<AppConfig>, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            ratings: Arc::new(RatingStore::new()),
        }
    }

    pub fn session_count(&self) -> usize {
        self.catalog.session_count()
    }
}

pub fn app_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sessions", get(list_sessions))
        .route("/sessions/{id}", get(get_session))
        .route(
            "/sessions/{id}/rating",
            get(get_session_rating).post(rate_session),
        )
        .route("/speakers", get(list_speakers))
        .route("/speakers/{id}", get(get_speaker))
        .route("/speakers/{id}/sessions", get(speaker_sessions))
        .route("/speakers/{id}/locations", get(speaker_locations))
        .route("/locations", get(list_locations))
        .route("/locations/{id}", get(get_location))
        .route("/locations/{id}/sessions", get(location_sessions))
        .route("/locations/{id}/speakers", get(location_speakers));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    sessions: usize,
    speakers: usize,
    locations: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
        sessions: state.catalog.session_count(),
        speakers: state.catalog.speaker_count(),
        locations: state.catalog.location_count(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct NameFilter {
    name: Option<String>,
}

impl NameFilter {
    fn parse(&self, max_query_chars: usize) -> Result<Option<SearchQuery>, AppError> {
        Ok(SearchQuery::parse_optional(
            self.name.as_deref(),
            max_query_chars,
        )?)
    }
}

async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Vec<SessionView>>, AppError> {
    let filter = SessionFilter::parse(
        query.id.as_deref(),
        query.title.as_deref(),
        query.tag.as_deref(),
        query.search.as_deref(),
        state.config.max_query_chars,
    )?;
    let sessions = state
        .catalog
        .sessions(&filter)
        .into_iter()
        .map(SessionView::from)
        .collect::<Vec<_>>();
    tracing::info!(
        endpoint = "list_sessions",
        filtered = !filter.is_empty(),
        results = sessions.len(),
        "Listed sessions"
    );
    Ok(Json(sessions))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    state
        .catalog
        .session(&id)
        .map(|session| Json(SessionView::from(session)))
        .ok_or_else(|| AppError::not_found(format!("session {id}")))
}

async fn get_session_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingSummary>, AppError> {
    ensure_session(&state, &id)?;
    Ok(Json(state.ratings.summary(&id)))
}

async fn rate_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RateRequest>,
) -> Result<Json<RatingSummary>, AppError> {
    ensure_session(&state, &id)?;
    let summary = state.ratings.rate(&id, request.rating)?;
    Ok(Json(summary))
}

fn ensure_session(state: &AppState, id: &str) -> Result<(), AppError> {
    if state.catalog.session(id).is_some() {
        Ok(())
    } else {
        Err(AppError::not_found(format!("session {id}")))
    }
}

async fn list_speakers(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> Result<Json<Vec<Speaker>>, AppError> {
    let name = filter.parse(state.config.max_query_chars)?;
    let speakers = state
        .catalog
        .speakers(name.as_ref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(speakers))
}

async fn get_speaker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Speaker>, AppError> {
    state
        .catalog
        .speaker(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("speaker {id}")))
}

async fn speaker_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SessionView>>, AppError> {
    if state.catalog.speaker(&id).is_none() {
        return Err(AppError::not_found(format!("speaker {id}")));
    }
    let sessions = state
        .catalog
        .sessions_for_speaker(&id)
        .into_iter()
        .map(SessionView::from)
        .collect();
    Ok(Json(sessions))
}

async fn speaker_locations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Location>>, AppError> {
    if state.catalog.speaker(&id).is_none() {
        return Err(AppError::not_found(format!("speaker {id}")));
    }
    let locations = state
        .catalog
        .locations_for_speaker(&id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(locations))
}

async fn list_locations(
    State(state): State<AppState>,
    Query(filter): Query<NameFilter>,
) -> Result<Json<Vec<Location>>, AppError> {
    let name = filter.parse(state.config.max_query_chars)?;
    let locations = state
        .catalog
        .locations(name.as_ref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(locations))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Location>, AppError> {
    state
        .catalog
        .location(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("location {id}")))
}

async fn location_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SessionView>>, AppError> {
    if state.catalog.location(&id).is_none() {
        return Err(AppError::not_found(format!("location {id}")));
    }
    let sessions = state
        .catalog
        .sessions_for_location(&id)
        .into_iter()
        .map(SessionView::from)
        .collect();
    Ok(Json(sessions))
}

async fn location_speakers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Speaker>>, AppError> {
    if state.catalog.location(&id).is_none() {
        return Err(AppError::not_found(format!("location {id}")));
    }
    let speakers = state
        .catalog
        .speakers_for_location(&id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(speakers))
}
