//! Quote endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, QuoteId};
use crate::http::server::AppState;
use crate::models::{PaginatedQuery, Quote, QuoteDraft};

/// Create/update quote request
#[derive(Debug, Deserialize)]
pub struct QuotePayload {
    pub author: String,
    pub text: String,
}

impl TryFrom<QuotePayload> for QuoteDraft {
    type Error = crate::models::ValidationError;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        QuoteDraft::new(&payload.author, &payload.text)
    }
}

/// GET /quotes?author=&limit=&offset= - list quotes in id order
async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let page = PaginatedQuery::resolve(&params, PaginatedQuery::default(), state.max_page_size)?;
    // Stored authors are trimmed, so the filter is too
    let author = params.get("author").map(|a| a.trim()).unwrap_or_default();

    let quotes = state.quotes.get_by_author(author, page).await?;
    Ok(Json(quotes))
}

/// POST /quotes - create a new quote
async fn create_quote(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<QuotePayload>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let draft = QuoteDraft::try_from(payload)?;
    let quote = state.quotes.create(draft).await?;

    tracing::info!(id = quote.id, author = %quote.author, "quote created");
    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes/{id} - get a single quote
async fn get_quote(
    State(state): State<Arc<AppState>>,
    QuoteId(id): QuoteId,
) -> Result<Json<Quote>, ApiError> {
    let quote = state.quotes.get_by_id(id).await?;
    Ok(Json(quote))
}

/// PUT /quotes/{id} - replace author and text
async fn update_quote(
    State(state): State<Arc<AppState>>,
    QuoteId(id): QuoteId,
    JsonBody(payload): JsonBody<QuotePayload>,
) -> Result<Json<Quote>, ApiError> {
    let draft = QuoteDraft::try_from(payload)?;
    let quote = state.quotes.update(id, draft).await?;

    tracing::info!(id, "quote updated");
    Ok(Json(quote))
}

/// DELETE /quotes/{id}
async fn delete_quote(
    State(state): State<Arc<AppState>>,
    QuoteId(id): QuoteId,
) -> Result<StatusCode, ApiError> {
    state.quotes.delete(id).await?;

    tracing::info!(id, "quote deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Quote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route(
            "/quotes/{id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn payload_validation() {
        let payload = QuotePayload {
            author: "Seneca".into(),
            text: String::new(),
        };
        assert!(matches!(
            QuoteDraft::try_from(payload),
            Err(ValidationError::Empty { field: "text" })
        ));
    }

    #[test]
    fn payload_rejects_unknown_shape() {
        let result: Result<QuotePayload, _> = serde_json::from_str(r#"{"author": "Seneca"}"#);
        assert!(result.is_err());
    }
}
