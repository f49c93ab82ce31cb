//! `/templates` handlers.
//!
//! Each handler turns the request into interactor arguments, calls the
//! interactor once, and maps the outcome onto a status and JSON body.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{instrument, warn};

use crate::{
    controllers::{
        dto::{
            IndexResponse, Pagination, TemplateRequest, TemplateResponse, request_converter,
            response_builder,
        },
        params::{IndexQuery, PageRequest},
    },
    error::{ApiError, http_status},
    routes::AppState,
};

/// `GET /templates`
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<(StatusCode, Json<IndexResponse>), ApiError> {
    let request = PageRequest::resolve(&query, state.pagination)?;

    let (status, page) = state
        .interactor
        .list_templates(request.limit, request.offset(), &request.keyword)?
        .into_parts();

    let templates = page
        .templates
        .iter()
        .map(|(template, tags)| response_builder(template, tags))
        .collect();
    let body = IndexResponse {
        templates,
        pagination: Pagination {
            page: request.page,
            limit: request.limit,
            total_pages: request.total_pages(page.total),
        },
    };

    Ok((http_status(status), Json(body)))
}

/// `GET /templates/{uid}`
#[instrument(skip_all, fields(uid = %uid))]
pub async fn show(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
    let (status, (template, tags)) = state.interactor.get_by_unique_id(&uid)?.into_parts();
    Ok((http_status(status), Json(response_builder(&template, &tags))))
}

/// `POST /templates`
///
/// A body that does not decode is logged and replaced by an empty request.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
    let request = decode_request(&body);
    let (template, tags) = request_converter(request);

    let (status, (template, tags)) = state.interactor.add(template, tags)?.into_parts();
    Ok((http_status(status), Json(response_builder(&template, &tags))))
}

fn decode_request(body: &[u8]) -> TemplateRequest {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring malformed template body");
        TemplateRequest::default()
    })
}
