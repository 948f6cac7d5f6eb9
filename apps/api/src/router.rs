use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::router::doctor_routes;
use doctor_cell::DirectoryState;

pub fn create_router(state: Arc<DirectoryState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctor Directory API is running!" }))
        .nest("/doctors", doctor_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use shared_config::AppConfig;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_and_nested_routes() {
        let state = Arc::new(DirectoryState::new(AppConfig::default()));
        let app = create_router(state);

        let root = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(root.status(), StatusCode::OK);

        let specialties = app
            .oneshot(Request::builder().uri("/doctors/specialties").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(specialties.status(), StatusCode::OK);
    }
}
