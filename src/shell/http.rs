use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::notes::use_cases::create_note::inbound::http as create_http;
use crate::modules::notes::use_cases::delete_note::inbound::http as delete_http;
use crate::modules::notes::use_cases::get_notes::inbound::http as get_http;
use crate::modules::notes::use_cases::update_note::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/notes",
            get(get_http::handle)
                .post(create_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;

    use super::router;

    #[rstest]
    #[case(Method::PATCH)]
    #[case(Method::OPTIONS)]
    #[tokio::test]
    async fn it_should_return_405_for_unsupported_methods(#[case] method: Method) {
        let response = router(AppState::in_memory())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/notes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Method Not Allowed");
    }

    #[tokio::test]
    async fn it_should_return_405_for_head_instead_of_serving_the_list() {
        let response = router(AppState::in_memory())
            .oneshot(Request::head("/notes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn it_should_return_404_for_other_paths() {
        let response = router(AppState::in_memory())
            .oneshot(Request::get("/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_dispatch_each_method_to_its_handler() {
        let app = router(AppState::in_memory());

        let created = app
            .clone()
            .oneshot(
                Request::post("/notes")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"a","body":"b"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let updated = app
            .clone()
            .oneshot(
                Request::put("/notes")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":1,"title":"c","body":"d"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);

        let fetched = app
            .clone()
            .oneshot(Request::get("/notes?id=1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);

        let deleted = app
            .oneshot(Request::delete("/notes?id=1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);
    }
}
