use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    AnalysisRecord, AnalysisResult, PreferenceChange, PreferenceModel, ReviewCard, RuntimeBucket,
    COUNTRIES, MOODS,
};
use crate::services::schema;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct RuntimeOption {
    pub value: RuntimeBucket,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub locations: Vec<&'static str>,
    pub moods: Vec<&'static str>,
    pub times: Vec<RuntimeOption>,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub preferences: PreferenceModel,
    pub industry_options: Vec<String>,
    pub platform_options: Vec<String>,
    pub ready: bool,
}

impl From<&PreferenceModel> for PreferencesResponse {
    fn from(prefs: &PreferenceModel) -> Self {
        Self {
            preferences: prefs.clone(),
            industry_options: prefs.industry_options(),
            platform_options: prefs.platform_options(),
            ready: prefs.is_ready(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub card: ReviewCard,
}

#[derive(Debug, Serialize)]
pub struct LatestAnalysisResponse {
    pub latest: Option<AnalysisRecord>,
    pub card: Option<ReviewCard>,
    pub last_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub version: u32,
    pub schema: Value,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Static option catalogs for the preference panel
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        locations: COUNTRIES.to_vec(),
        moods: MOODS.to_vec(),
        times: RuntimeBucket::ALL
            .iter()
            .map(|bucket| RuntimeOption {
                value: *bucket,
                label: bucket.label(),
            })
            .collect(),
    })
}

/// Industries available for a location
pub async fn get_industry_options(Query(params): Query<LocationQuery>) -> Json<Vec<String>> {
    Json(crate::models::industry_options_for(&params.location))
}

/// Streaming platforms available for a location
pub async fn get_platform_options(Query(params): Query<LocationQuery>) -> Json<Vec<String>> {
    Json(crate::models::platform_options_for(&params.location))
}

/// Get the session's preferences
pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    let session = state.session.read().await;
    Json(PreferencesResponse::from(&session.preferences))
}

/// Apply one preference change
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(change): Json<PreferenceChange>,
) -> AppResult<Json<PreferencesResponse>> {
    let mut session = state.session.write().await;
    session.preferences = session.preferences.apply(change)?;

    tracing::debug!(preferences = ?session.preferences, "Preferences updated");

    Ok(Json(PreferencesResponse::from(&session.preferences)))
}

/// Run a movie analysis for the session's preferences
pub async fn analyze(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let query = request.query;
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Please enter a movie title or question.".to_string(),
        ));
    }

    let preferences = state.session.read().await.preferences.clone();
    if !preferences.is_ready() {
        return Err(AppError::InvalidInput(
            "Please select a location in the sidebar first.".to_string(),
        ));
    }

    let _slot = state
        .analysis_slot
        .try_lock()
        .map_err(|_| AppError::Busy)?;

    tracing::info!(
        request_id = %request_id,
        provider = state.translator.provider_name(),
        query = %query,
        location = %preferences.location,
        "Processing analysis request"
    );

    let outcome = state.translator.analyze(&query, &preferences).await;

    let mut session = state.session.write().await;
    match outcome {
        Ok(analysis) => {
            let card = ReviewCard::from(&analysis);
            session.latest = Some(AnalysisRecord {
                query,
                preferences,
                analysis: analysis.clone(),
                analyzed_at: Utc::now(),
            });
            session.last_error = None;

            tracing::info!(request_id = %request_id, "Analysis completed");

            Ok(Json(AnalyzeResponse { analysis, card }))
        }
        Err(e) => {
            session.last_error = Some(e.user_message());
            Err(e)
        }
    }
}

/// Latest analysis for the session, with the last error if the most recent attempt failed
pub async fn get_latest_analysis(
    State(state): State<AppState>,
) -> AppResult<Json<LatestAnalysisResponse>> {
    let session = state.session.read().await;

    if session.latest.is_none() && session.last_error.is_none() {
        return Err(AppError::NotFound("No analysis has been run yet".to_string()));
    }

    Ok(Json(LatestAnalysisResponse {
        card: session
            .latest
            .as_ref()
            .map(|record| ReviewCard::from(&record.analysis)),
        latest: session.latest.clone(),
        last_error: session.last_error.clone(),
    }))
}

/// Latest review card as plain text
pub async fn get_latest_card(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let session = state.session.read().await;
    let record = session
        .latest
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        ReviewCard::from(&record.analysis).to_string(),
    ))
}

/// The response contract sent to the provider
pub async fn get_schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        version: schema::SCHEMA_VERSION,
        schema: schema::analysis_schema(),
    })
}
