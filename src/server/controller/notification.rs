use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::notification::{
        AudiencePreviewDto, AudienceQueryDto, BroadcastRequestDto, PaginationQueryDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            audience::{FilterParams, FilterSpec},
            broadcast::{BroadcastMessage, BroadcastParam},
            notification::GetNotificationsParam,
        },
        service::{broadcast::BroadcastService, notification::NotificationService},
        state::AppState,
    },
};

/// Largest page size accepted by the history endpoint.
const MAX_PER_PAGE: u64 = 100;

/// POST /api/notifications/broadcast - Send a message to a filtered audience
///
/// Resolves the audience, dispatches the message and returns the finished campaign record.
/// The request completes only after every send has settled. A client that disconnects early
/// does not cancel the broadcast; the record still reaches a terminal state.
///
/// # Authentication
/// Requires `Authorization: Bearer <ADMIN_TOKEN>`
///
/// # Returns
/// - `200 OK`: NotificationDto in a terminal state
/// - `400 Bad Request`: Empty message body
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Audience query or record persistence failed
pub async fn send_broadcast(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BroadcastRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require()?;

    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".to_string()));
    }

    let params = FilterParams::from_dto(payload.filter_params);
    let param = BroadcastParam {
        filter: FilterSpec::from_name(&payload.filter, &params),
        message: BroadcastMessage::new(payload.title, payload.message, payload.photo_url),
    };

    let service = BroadcastService::new(&state.db, state.transport.clone(), state.dispatch_config);
    let notification = service.run_broadcast(param).await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// GET /api/notifications/audience - Preview who a filter would reach
///
/// # Query Parameters
/// - `filter`: Filter name
/// - `days`: Optional window in days
/// - `tariff_id`: Optional tariff for `by_tariff`
///
/// # Returns
/// - `200 OK`: AudiencePreviewDto
/// - `401 Unauthorized`: Missing or invalid token
pub async fn preview_audience(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AudienceQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require()?;

    let params = FilterParams {
        days: query.days,
        tariff_id: query.tariff_id,
    };
    let filter = FilterSpec::from_name(&query.filter, &params);

    let service = BroadcastService::new(&state.db, state.transport.clone(), state.dispatch_config);
    let recipients = service.preview_audience(&filter).await?;

    Ok((
        StatusCode::OK,
        Json(AudiencePreviewDto {
            filter: filter.name().to_string(),
            total: recipients.len() as u64,
            recipients: recipients.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// GET /api/notifications - Paginated campaign history, newest first
///
/// # Query Parameters
/// - `page`: Zero-indexed page (default 0)
/// - `per_page`: Page size, 1 to 100 (default 20)
///
/// # Returns
/// - `200 OK`: PaginatedNotificationsDto
/// - `400 Bad Request`: `per_page` out of range
/// - `401 Unauthorized`: Missing or invalid token
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require()?;

    if query.per_page == 0 || query.per_page > MAX_PER_PAGE {
        return Err(AppError::BadRequest(format!(
            "per_page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }

    let service = NotificationService::new(&state.db);
    let notifications = service
        .get_notifications(GetNotificationsParam {
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// GET /api/notifications/{id} - One campaign record
///
/// # Returns
/// - `200 OK`: NotificationDto
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No record with that ID
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.admin_token, &headers).require()?;

    let service = NotificationService::new(&state.db);
    let notification = service.get_notification(id).await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}
