use super::protocol::*;
use super::service::Microblog;
use crate::domain::{DomainError, Tweet, User, UserId};

use axum::extract::{Extension, Path, Query};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Builds the `/api/v1` router over a shared service.
pub fn router(service: Arc<Microblog>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    Router::new()
        .route(ENDPOINT_TWEETS, post(handle_create_tweet))
        .route(ENDPOINT_TIMELINE, get(handle_get_timeline))
        .route(ENDPOINT_USER_TWEETS, get(handle_get_user_tweets))
        .route(ENDPOINT_FOLLOW, post(handle_follow))
        .route(ENDPOINT_UNFOLLOW, post(handle_unfollow))
        .route(ENDPOINT_FOLLOWING, get(handle_get_following))
        .route(ENDPOINT_USERS, post(handle_register_user))
        .route(ENDPOINT_USER, get(handle_get_user))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(service))
        .layer(cors)
}

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn caller_id(headers: &HeaderMap) -> Result<UserId, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty())
        .map(UserId::from)
        .ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                "User ID required in X-User-ID header",
            )
        })
}

fn rejected(err: DomainError) -> ApiError {
    tracing::warn!("Rejected request: {}", err);
    error(StatusCode::BAD_REQUEST, err.to_string())
}

pub async fn handle_create_tweet(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
    Json(req): Json<CreateTweetRequest>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    let author_id = caller_id(&headers)?;

    match service.create_tweet(&author_id, &req.content) {
        Ok(tweet) => {
            tracing::info!("Tweet {} created by {}", tweet.id, author_id);
            Ok((StatusCode::CREATED, Json(tweet)))
        }
        Err(e) => Err(rejected(e)),
    }
}

pub async fn handle_get_timeline(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<TweetListResponse>), ApiError> {
    let user_id = caller_id(&headers)?;
    let tweets = service.get_timeline(&user_id);
    Ok((StatusCode::OK, Json(tweets.into())))
}

pub async fn handle_get_user_tweets(
    Extension(service): Extension<Arc<Microblog>>,
    Query(params): Query<UserTweetsParams>,
) -> Result<(StatusCode, Json<TweetListResponse>), ApiError> {
    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .map(UserId::new)
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "User ID required"))?;

    let tweets = service.get_user_tweets(&user_id);
    Ok((StatusCode::OK, Json(tweets.into())))
}

fn followee_id(req: &FollowRequest) -> Result<UserId, ApiError> {
    match req.followee_id.as_str() {
        "" => Err(error(StatusCode::BAD_REQUEST, "Followee ID required")),
        id => Ok(UserId::from(id)),
    }
}

pub async fn handle_follow(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
    Json(req): Json<FollowRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let follower_id = caller_id(&headers)?;
    let followee_id = followee_id(&req)?;

    service
        .follow_user(&follower_id, &followee_id)
        .map_err(rejected)?;

    tracing::info!("{} now follows {}", follower_id, followee_id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Successfully followed user".to_string(),
        }),
    ))
}

pub async fn handle_unfollow(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
    Json(req): Json<FollowRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let follower_id = caller_id(&headers)?;
    let followee_id = followee_id(&req)?;

    service.unfollow_user(&follower_id, &followee_id);

    tracing::info!("{} unfollowed {}", follower_id, followee_id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Successfully unfollowed user".to_string(),
        }),
    ))
}

pub async fn handle_get_following(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<FollowingResponse>), ApiError> {
    let user_id = caller_id(&headers)?;
    let followee_ids = service.get_following(&user_id);

    Ok((
        StatusCode::OK,
        Json(FollowingResponse {
            count: followee_ids.len(),
            followee_ids,
        }),
    ))
}

pub async fn handle_register_user(
    Extension(service): Extension<Arc<Microblog>>,
    headers: HeaderMap,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user_id = caller_id(&headers)?;
    let user = service.register_user(&user_id, &req.name);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn handle_get_user(
    Extension(service): Extension<Arc<Microblog>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    match service.get_user(&UserId::new(id)) {
        Some(user) => Ok((StatusCode::OK, Json(user))),
        None => Err(error(StatusCode::NOT_FOUND, "user not found")),
    }
}

pub async fn handle_health(
    Extension(service): Extension<Arc<Microblog>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            stats: service.stats(),
        }),
    )
}
