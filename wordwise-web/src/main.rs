use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use wordwise::{Config, ErrorKind, ToolError, Toolbox, TranslationPair};

#[derive(Serialize, Deserialize)]
pub struct RandomWordsRequest {
    pub language: String,
    pub n: i64,
}

#[derive(Serialize, Deserialize)]
pub struct RandomWordsByDifficultyRequest {
    pub language: String,
    pub difficulty_level: String,
    pub n: i64,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub words: Vec<String>,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translations: Vec<TranslationPair>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

#[derive(Clone)]
pub struct AppState {
    pub toolbox: Arc<Toolbox>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(error: ToolError) -> ApiError {
    let kind = error.kind();
    let status = match kind {
        ErrorKind::ResourceNotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::MalformedResource => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::UnparsableResponse | ErrorKind::Service => StatusCode::BAD_GATEWAY,
    };

    tracing::warn!(?kind, %error, "request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            kind,
        }),
    )
}

/// Unwrap a JSON body, reporting a rejected body as `InvalidArgument`
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| api_error(ToolError::invalid_argument(rejection.body_text())))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/languages", get(list_languages))
        .route("/api/random-words", post(random_words))
        .route("/api/random-words/difficulty", post(random_words_by_difficulty))
        .route("/api/translate", post(translate_words))
        .route("/api/tools/{name}", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    wordwise::init_tracing("info");

    let config = Config::from_env();
    let translator = config
        .gemini_translator()
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let state = AppState {
        toolbox: Arc::new(Toolbox::new(config.word_list_store(), translator)),
    };

    info!(
        data_dir = %config.data_dir.display(),
        model = %config.model,
        "Starting wordwise web server"
    );

    let listener = tokio::net::TcpListener::bind(&config.web_addr).await?;
    info!("Server running at http://{}", config.web_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn list_languages(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    state.toolbox.languages().map(Json).map_err(api_error)
}

async fn random_words(
    State(state): State<AppState>,
    payload: Result<Json<RandomWordsRequest>, JsonRejection>,
) -> Result<Json<WordsResponse>, ApiError> {
    let request = json_body(payload)?;
    let words = state
        .toolbox
        .get_random_words(&request.language, request.n)
        .map_err(api_error)?;
    Ok(Json(WordsResponse { words }))
}

async fn random_words_by_difficulty(
    State(state): State<AppState>,
    payload: Result<Json<RandomWordsByDifficultyRequest>, JsonRejection>,
) -> Result<Json<WordsResponse>, ApiError> {
    let request = json_body(payload)?;
    let words = state
        .toolbox
        .get_random_words_by_difficulty(&request.language, &request.difficulty_level, request.n)
        .map_err(api_error)?;
    Ok(Json(WordsResponse { words }))
}

async fn translate_words(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = json_body(payload)?;
    info!(
        "Translating {} words from {} to {}",
        request.words.len(),
        &request.source_language,
        &request.target_language
    );

    let translations = state
        .toolbox
        .translate_words(
            &request.words,
            &request.source_language,
            &request.target_language,
        )
        .await
        .map_err(api_error)?;

    Ok(Json(TranslateResponse { translations }))
}

async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let args = json_body(payload)?;
    state
        .toolbox
        .dispatch(&name, args)
        .await
        .map(Json)
        .map_err(api_error)
}
