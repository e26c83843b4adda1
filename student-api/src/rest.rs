//! HTTP layer: request/response types, handlers and the API router.
//! Pure translation between the wire and the domain; no business logic.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::models::{CreateStudentCommand, StudentError};
use crate::domain::student_service::StudentService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub student_service: StudentService,
}

impl AppState {
    /// Create new application state with the given StudentService
    pub fn new(student_service: StudentService) -> Self {
        Self { student_service }
    }
}

/// Build the `/api` router
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/students", get(get_students).post(create_student))
}

/// Query parameters for the student list endpoint
#[derive(Deserialize, Debug)]
pub struct StudentListQuery {
    /// Case-sensitive substring filter on the first name
    #[serde(rename = "fName")]
    pub f_name: Option<String>,
}

/// Request body for creating a student
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub group_assignments: Option<Vec<i64>>,
}

/// Axum handler function for GET /api/students
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> impl IntoResponse {
    info!("GET /api/students - query: {:?}", query);

    match state
        .student_service
        .list_student_details(query.f_name.as_deref())
        .await
    {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => {
            error!("Error listing students: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing students").into_response()
        }
    }
}

/// Axum handler function for POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    info!("POST /api/students - request: {:?}", request);

    let command = CreateStudentCommand {
        first_name: request.first_name,
        last_name: request.last_name,
        age: request.age,
        group_ids: request.group_assignments,
    };

    match state.student_service.create_student(command).await {
        Ok(detail) => (StatusCode::CREATED, Json(detail)).into_response(),
        Err(e @ StudentError::GroupNotFound(_)) => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(StudentError::Invalid(e)) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Err(e) => {
            error!("Error creating student: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating student").into_response()
        }
    }
}
