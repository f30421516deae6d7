use super::error::*;
use crate::application_port::{
    CreateMessageInput, MessageOutcome, MessageService, UpdateMessageInput, ValidationErrors,
};
use crate::domain_model::{MessageId, OrganizationId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{self, reject};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn empty() -> Self {
        ApiResponse {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn err(code: ApiErrorCode, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
                fields: None,
            }),
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code: ApiErrorCode::ValidationFailed,
                message: "One or more fields failed validation.".to_string(),
                fields: Some(errors),
            }),
        }
    }
}

pub async fn list_messages(
    organization_id: OrganizationId,
    message_service: Arc<dyn MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let messages = message_service
        .get_all_messages(organization_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ApiResponse::ok(messages)))
}

pub async fn get_message(
    organization_id: OrganizationId,
    id: MessageId,
    message_service: Arc<dyn MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let message = message_service
        .get_message(organization_id, id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let (status, body) = match message {
        Some(message) => (StatusCode::OK, ApiResponse::ok(message)),
        None => (
            StatusCode::NOT_FOUND,
            ApiResponse::err(
                ApiErrorCode::MessageNotFound,
                "Message not found in this organization.",
            ),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub title: String,
    pub content: String,
}

pub async fn create_message(
    organization_id: OrganizationId,
    body: CreateMessageRequest,
    message_service: Arc<dyn MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let input = CreateMessageInput {
        title: body.title,
        content: body.content,
    };
    let outcome = message_service
        .create_message(organization_id, input)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let (status, body) = match outcome {
        MessageOutcome::Created(message) => (StatusCode::CREATED, ApiResponse::ok(message)),
        MessageOutcome::Invalid(errors) => (StatusCode::BAD_REQUEST, ApiResponse::invalid(errors)),
        MessageOutcome::Conflict(message) => (
            StatusCode::CONFLICT,
            ApiResponse::err(ApiErrorCode::DuplicateTitle, message),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::err(ApiErrorCode::InternalError, "Unexpected outcome."),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateMessageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn update_message(
    organization_id: OrganizationId,
    id: MessageId,
    body: UpdateMessageRequest,
    message_service: Arc<dyn MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let input = UpdateMessageInput {
        title: body.title,
        content: body.content,
    };
    let outcome = message_service
        .update_message(organization_id, id, input)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let (status, body) = match outcome {
        MessageOutcome::Updated => (StatusCode::OK, ApiResponse::<()>::empty()),
        MessageOutcome::NotFound(message) => (
            StatusCode::NOT_FOUND,
            ApiResponse::err(ApiErrorCode::MessageNotFound, message),
        ),
        MessageOutcome::Invalid(errors) => (StatusCode::BAD_REQUEST, ApiResponse::invalid(errors)),
        MessageOutcome::Conflict(message) => (
            StatusCode::CONFLICT,
            ApiResponse::err(ApiErrorCode::DuplicateTitle, message),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::err(ApiErrorCode::InternalError, "Unexpected outcome."),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

pub async fn delete_message(
    organization_id: OrganizationId,
    id: MessageId,
    message_service: Arc<dyn MessageService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let outcome = message_service
        .delete_message(organization_id, id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let (status, body) = match outcome {
        MessageOutcome::Deleted => (StatusCode::OK, ApiResponse::<()>::empty()),
        MessageOutcome::NotFound(message) => (
            StatusCode::NOT_FOUND,
            ApiResponse::err(ApiErrorCode::MessageNotFound, message),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::err(ApiErrorCode::InternalError, "Unexpected outcome."),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
