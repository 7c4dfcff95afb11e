//! HTTP handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use needle_constant::app::DEFAULT_CHAR;
use needle_core::{NeedleEngine, TraceObserver};
use serde::{Deserialize, Serialize};

/// Value of the first `char` pair in the query string, or `"0"` when absent.
/// Later repeats of the parameter are ignored.
pub fn char_param(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .find(|(key, _)| key == "char")
        .map_or(DEFAULT_CHAR, |(_, value)| value.as_str())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /get_char_matrix?char=<c>`
pub async fn get_char_matrix(
    State(engine): State<Arc<NeedleEngine>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let ch = char_param(&pairs);
    match engine.map_character_observed(ch, &TraceObserver) {
        Some(found) => {
            tracing::debug!(ch, rows = found.shape.0, cols = found.shape.1, "char matrix served");
            Json(found).into_response()
        }
        None => {
            tracing::info!(ch, "char not found");
            let body = ErrorBody {
                error: format!("Character '{ch}' not found"),
            };
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub font_name: String,
    pub size: u32,
    pub characters: usize,
}

/// `GET /health`
pub async fn health(State(engine): State<Arc<NeedleEngine>>) -> impl IntoResponse {
    Json(Health {
        status: "ok".to_string(),
        font_name: engine.font_name().to_string(),
        size: engine.size(),
        characters: engine.len(),
    })
}
