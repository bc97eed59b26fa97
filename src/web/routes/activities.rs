use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::ActivityStore;
use crate::models::{ActivityTable, EmailQuery, MessageResponse};
use crate::services::activities_service;
use crate::web::error::ApiError;

type QueryPairs = Query<Vec<(String, String)>>;

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityTable> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<QueryPairs, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = activity_and_email(path, query)?;
    let message = activities_service::signup(&store, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<QueryPairs, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = activity_and_email(path, query)?;
    let message = activities_service::unregister(&store, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

fn activity_and_email(
    path: Result<Path<String>, PathRejection>,
    query: Result<QueryPairs, QueryRejection>,
) -> Result<(String, String), ApiError> {
    let Path(activity_name) = path.map_err(|e| ApiError::InvalidPath(e.body_text()))?;
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let email = EmailQuery::from_pairs(pairs)
        .email
        .ok_or(ApiError::MissingEmail)?;
    Ok((activity_name, email))
}
