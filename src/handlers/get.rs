use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /courses/:id handler - Retrieve a single course
#[utoipa::path(
    get,
    path = routes::COURSE_ITEM,
    params(
        ("id" = String, Path, description = "Numeric id of the course")
    ),
    responses(
        (status = 200, description = "Course found", body = serde_json::Value),
        (status = 400, description = "Missing or invalid course id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let id = super::parse_course_id(&id_str)?;

    match state.store.find_course(id).await {
        Ok(Some(course)) => {
            tracing::info!("Successfully retrieved course with id: {}", id);
            Ok((StatusCode::OK, Json(course)))
        }
        Ok(None) => {
            tracing::info!("Course not found with id: {}", id);
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::internal("Failed to retrieve course.", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::CourseStore;
    use crate::state::AppState;
    use axum::{body::Body, http::Request, routing::get, Router};
    use mongodb::bson::doc;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_uri() -> String {
        std::env::var("MONGODB_URI").unwrap_or_else(|_| {
            "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000&connectTimeoutMS=2000"
                .to_string()
        })
    }

    /// Build a router plus the state it serves, for seeding.
    ///
    /// Client construction does not touch the network, so validation-only
    /// tests work without a running mongod.
    async fn setup_test_app(database: &str) -> (Router, AppState) {
        let config = Config {
            mongodb_uri: test_uri(),
            mongodb_database: database.to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let store = CourseStore::connect(&config)
            .await
            .expect("Failed to create course store");

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        let app = Router::new()
            .route(crate::routes::COURSE_ITEM, get(get_handler))
            .with_state(state.clone());

        (app, state)
    }

    /// Returns false when no local mongod answers, so the test can skip.
    async fn seed_courses(store: &CourseStore, courses: &[mongodb::bson::Document]) -> bool {
        if store.health_check().await.is_err() {
            println!("GET endpoint test skipped (mongod may not be running)");
            return false;
        }
        let collection = store.courses();
        collection.delete_many(doc! {}, None).await.unwrap();
        for course in courses {
            collection.insert_one(course, None).await.unwrap();
        }
        true
    }

    #[tokio::test]
    async fn test_get_endpoint_invalid_id() {
        let (app, _state) = setup_test_app("coursesDbGetInvalidTest").await;

        for bad_id in ["abc", "12.5x", "NaN"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(format!("/courses/{}", bad_id))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(error_response.error, "Invalid course ID format.");
        }
    }

    #[tokio::test]
    async fn test_get_endpoint_missing_id() {
        // An empty path segment never reaches the route, so exercise the
        // handler directly.
        let (_app, state) = setup_test_app("coursesDbGetMissingTest").await;

        let result = get_handler(State(state), Path(String::new())).await;
        assert!(matches!(result, Err(ApiError::MissingId)));
    }

    #[tokio::test]
    async fn test_get_endpoint_success() {
        let (app, state) = setup_test_app("coursesDbGetSuccessTest").await;

        let seeded = seed_courses(
            &state.store,
            &[doc! { "id": 42_i64, "title": "Rust 101", "credits": 3_i64 }],
        )
        .await;
        if !seeded {
            return;
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/courses/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let course: JsonValue = serde_json::from_slice(&body).unwrap();
        assert_eq!(course["id"], json!(42));
        assert_eq!(course["title"], json!("Rust 101"));
        assert_eq!(course["credits"], json!(3));
    }

    #[tokio::test]
    async fn test_get_endpoint_numeric_id_forms() {
        let (app, state) = setup_test_app("coursesDbGetNumericFormsTest").await;

        let seeded = seed_courses(
            &state.store,
            &[doc! { "id": 1000_i64, "title": "Algorithms" }],
        )
        .await;
        if !seeded {
            return;
        }

        // Exponent form resolves to the same numeric id
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/courses/1e3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let course: JsonValue = serde_json::from_slice(&body).unwrap();
        assert_eq!(course["id"], json!(1000));

        // A non-integral id is a valid number that matches no course
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/courses/12.5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Course not found.");
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let (app, state) = setup_test_app("coursesDbGetNotFoundTest").await;

        let seeded = seed_courses(&state.store, &[]).await;
        if !seeded {
            return;
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/courses/31337")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Course not found.");
    }
}
