use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        lesson::{BookLessonDto, LessonDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::lesson::{Lesson, LessonRequest},
        service::lesson::LessonService,
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Book a lesson with a coach.
///
/// The logged-in player becomes the lesson's player. A coach can only have one lesson
/// starting at a given date and time.
///
/// # Access Control
/// - `Player` - Checked by the lesson service
///
/// # Returns
/// - `201 Created` - The lesson with its id
/// - `400 Bad Request` - Malformed date or times, or start not before end
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not a player
/// - `404 Not Found` - Coach not found
/// - `409 Conflict` - Coach already has a lesson starting then
#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    request_body = BookLessonDto,
    responses(
        (status = 201, description = "Lesson booked", body = LessonDto),
        (status = 400, description = "Invalid date or times", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a player", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 409, description = "Coach slot taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BookLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lesson = LessonService::new(&state.db, &state.coach_locks)
        .book(&caller, LessonRequest::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/lessons/player/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Player user ID")
    ),
    responses(
        (status = 200, description = "Player's lessons by date and start", body = Vec<LessonDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_player_lessons(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lessons = LessonService::new(&state.db, &state.coach_locks)
        .list_for_player(id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(lessons))))
}

#[utoipa::path(
    get,
    path = "/api/lessons/coach/{id}",
    tag = LESSON_TAG,
    params(
        ("id" = i32, Path, description = "Coach user ID")
    ),
    responses(
        (status = 200, description = "Coach's lessons by date and start", body = Vec<LessonDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_coach_lessons(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lessons = LessonService::new(&state.db, &state.coach_locks)
        .list_for_coach(id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(lessons))))
}

fn into_dtos(lessons: Vec<Lesson>) -> Vec<LessonDto> {
    lessons.into_iter().map(|l| l.into_dto()).collect()
}
