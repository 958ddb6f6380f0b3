pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::guidance::generator::tests::{StubModel, SCENARIO_REPLY};
    use crate::guidance::generator::GuidanceGenerator;
    use crate::guidance::prompts::PromptContract;

    fn app_with(model: Arc<StubModel>) -> Router {
        build_router(AppState {
            generator: GuidanceGenerator::new(model, PromptContract::default()),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn generate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn scenario_body() -> Value {
        json!({
            "role": "backend engineer",
            "experience": "3 years",
            "goal": "get a senior role"
        })
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let app = app_with(Arc::new(StubModel::failing()));
        let (status, body) = send(app, get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "Career Prep AI Agent running"}));
    }

    #[tokio::test]
    async fn test_health_is_ok_even_when_model_is_down() {
        let model = Arc::new(StubModel::failing());
        let (status, body) = send(app_with(model.clone()), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_echoes_model_output() {
        let model = Arc::new(StubModel::replying(SCENARIO_REPLY));
        let (status, body) =
            send(app_with(model.clone()), generate_request(scenario_body())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "resume_feedback": "Highlight your backend projects.",
                "interview_questions": ["Explain REST vs RPC"],
                "learning_roadmap": ["Learn system design"]
            })
        );
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_preserves_list_order() {
        let reply = json!({
            "resume_feedback": "Quantify impact.",
            "interview_questions": ["third", "first", "second"],
            "learning_roadmap": ["z", "a", "m"]
        });
        let model = Arc::new(StubModel::replying(&reply.to_string()));
        let (status, body) = send(app_with(model), generate_request(scenario_body())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, reply);
    }

    #[tokio::test]
    async fn test_short_experience_is_400_without_model_call() {
        let model = Arc::new(StubModel::replying(SCENARIO_REPLY));
        let (status, body) = send(
            app_with(model.clone()),
            generate_request(json!({"role": "x", "experience": "hi", "goal": "y"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Experience description is too short"}));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_padded_short_experience_is_400() {
        let model = Arc::new(StubModel::replying(SCENARIO_REPLY));
        let (status, _) = send(
            app_with(model.clone()),
            generate_request(json!({"role": "x", "experience": "   abc    ", "goal": "y"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_failure_is_500() {
        let (status, body) = send(
            app_with(Arc::new(StubModel::failing())),
            generate_request(scenario_body()),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to generate career guidance"}));
    }

    #[tokio::test]
    async fn test_malformed_replies_are_500() {
        let replies = [
            "Here is some career advice in prose.",
            r#"{"resume_feedback": "ok", "interview_questions": ["q"]}"#,
            r#"{"resume_feedback": "ok", "interview_questions": "q", "learning_roadmap": []}"#,
            r#"{"resume_feedback": 42, "interview_questions": [], "learning_roadmap": []}"#,
        ];

        for reply in replies {
            let (status, body) = send(
                app_with(Arc::new(StubModel::replying(reply))),
                generate_request(scenario_body()),
            )
            .await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "reply: {reply}");
            assert_eq!(body["detail"], "Failed to generate career guidance");
        }
    }

    #[tokio::test]
    async fn test_missing_field_rejected_before_model_call() {
        let model = Arc::new(StubModel::replying(SCENARIO_REPLY));
        let (status, _) = send(
            app_with(model.clone()),
            generate_request(json!({"role": "x", "experience": "3 years"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_body_rejections_use_detail_shape() {
        let model = Arc::new(StubModel::replying(SCENARIO_REPLY));

        let (status, body) = send(
            app_with(model.clone()),
            generate_request(json!({"role": "x", "experience": "3 years"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("goal"));

        let no_content_type = Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .body(Body::from(scenario_body().to_string()))
            .unwrap();
        let (status, body) = send(app_with(model.clone()), no_content_type).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["detail"].is_string());

        let not_json = Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app_with(model.clone()), not_json).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());

        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app_with(Arc::new(StubModel::failing()));
        let (status, _) = send(app, get_request("/api/v1/resumes")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
