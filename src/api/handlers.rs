use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{
    AttributeVector, GameDescription, ItemId, OwnershipRecord, Page, ScoreTier, ScoredItem,
    TasteProfile, UserId,
};
use crate::services::{build_profile, recommendations_for};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub name: ItemId,
    pub attributes: AttributeVector,
    pub description: Option<GameDescription>,
}

#[derive(Debug, Serialize)]
pub struct OwnedGamesResponse {
    pub username: UserId,
    pub games: Vec<ItemId>,
}

#[derive(Debug, Deserialize)]
pub struct AddGameRequest {
    pub game: ItemId,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: UserId,
    pub profile: Option<TasteProfile>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendationEntry {
    pub rank: usize,
    pub game: ItemId,
    pub score: f64,
    pub tier: ScoreTier,
    pub description: Option<GameDescription>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub username: UserId,
    /// False when the user has no usable ownership history
    pub available: bool,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub recommendations: Vec<RecommendationEntry>,
    pub generated_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List the catalog in catalog order
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<GameResponse>> {
    let games = state
        .catalog
        .items()
        .iter()
        .map(|item| GameResponse {
            name: item.name.clone(),
            attributes: item.attributes.clone(),
            description: state.description(&item.name),
        })
        .collect();
    Json(games)
}

/// Look up a single game by name
pub async fn get_game(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<GameResponse>> {
    let item = state
        .catalog
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("Game '{}' is not in the catalog", name)))?;

    Ok(Json(GameResponse {
        name: item.name.clone(),
        attributes: item.attributes.clone(),
        description: state.description(&item.name),
    }))
}

/// List users that have ownership records
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserId>>> {
    let users = state.ownership.users().await?;
    Ok(Json(users))
}

/// Games a user owns, in the order they were added
pub async fn get_owned_games(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<OwnedGamesResponse>> {
    let games = state.ownership.owned_by(&username).await?;
    Ok(Json(OwnedGamesResponse { username, games }))
}

/// Record that a user owns a game
pub async fn add_owned_game(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(username): Path<String>,
    Json(request): Json<AddGameRequest>,
) -> AppResult<(StatusCode, Json<OwnershipRecord>)> {
    let game = request.game.trim();

    // Reads match usernames exactly
    if username.trim() != username {
        return Err(AppError::InvalidInput(
            "Username must not have surrounding whitespace".to_string(),
        ));
    }
    if username.is_empty() {
        return Err(AppError::InvalidInput("Username must not be empty".to_string()));
    }
    if game.is_empty() {
        return Err(AppError::InvalidInput("Game must not be empty".to_string()));
    }
    if !state.catalog.contains(game) {
        tracing::warn!(
            request_id = %request_id,
            username = %username,
            game,
            "Recording ownership of a game that is not in the catalog"
        );
    }

    state.ownership.append(&username, game).await?;

    tracing::info!(
        request_id = %request_id,
        username = %username,
        game,
        store = state.ownership.name(),
        "Ownership recorded"
    );

    Ok((StatusCode::CREATED, Json(OwnershipRecord::new(username.as_str(), game))))
}

/// A user's averaged taste profile, or null without usable history
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<ProfileResponse>> {
    let owned = state.ownership.owned_by(&username).await?;
    let profile = build_profile(&owned, &state.catalog);
    Ok(Json(ProfileResponse { username, profile }))
}

/// One page of a user's ranked recommendations
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    tracing::info!(
        request_id = %request_id,
        username = %username,
        page = query.page,
        "Processing recommendation request"
    );

    let ranked: Vec<ScoredItem> =
        recommendations_for(state.ownership.as_ref(), &state.catalog, &username).await?;

    let page = Page::slice(&ranked, query.page, state.page_size);
    let recommendations = page
        .items
        .iter()
        .enumerate()
        .map(|(offset, scored)| RecommendationEntry {
            rank: page.first_rank + offset,
            game: scored.game.clone(),
            score: scored.score,
            tier: scored.tier(),
            description: state.description(&scored.game),
        })
        .collect();

    Ok(Json(RecommendationsResponse {
        available: !ranked.is_empty(),
        page: page.page,
        page_size: state.page_size,
        total: ranked.len(),
        has_previous: page.has_previous,
        has_next: page.has_next,
        recommendations,
        generated_at: Utc::now(),
        username,
    }))
}
