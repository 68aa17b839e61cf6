pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::page_handler).post(page::submit_handler))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Config;

    fn app_with_endpoint(endpoint: &str) -> Router {
        build_router(AppState::from_config(Config {
            contact_endpoint: endpoint.to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }))
    }

    fn app() -> Router {
        app_with_endpoint("http://localhost:9/contact")
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        read(
            app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await
    }

    async fn post_form(app: Router, body: &str) -> (StatusCode, String) {
        read(
            app.oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap(),
        )
        .await
    }

    async fn read(response: axum::response::Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["contact_endpoint"], "http://localhost:9/contact");
    }

    #[tokio::test]
    async fn test_page_defaults_to_home() {
        let (status, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"?section=home#home\" class=\"active\""));
        assert!(body.contains("Запись на консультацию"));
    }

    #[tokio::test]
    async fn test_page_marks_requested_section() {
        let (status, body) = get_body("/?section=experience").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"?section=experience#experience\" class=\"active\""));
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let (status, body) = get_body("/?section=pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }

    // name=Ivan, email=ivan@example.com, phone=+7900..., message=Hello
    const IVAN: &str = "name=Ivan&email=ivan%40example.com&phone=%2B7900...&message=Hello";

    #[tokio::test]
    async fn test_posting_the_form_sends_it_and_clears_the_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "name": "Ivan",
                "email": "ivan@example.com",
                "phone": "+7900...",
                "message": "Hello"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post_form(app_with_endpoint(&server.uri()), IVAN).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("role=\"status\"><strong>Заявка отправлена!</strong>"));
        assert!(body.contains("name=\"name\" type=\"text\" required placeholder=\"Иван Иванов\" value=\"\""));
        assert!(!body.contains("value=\"Ivan\""));
        assert!(body.contains("<button type=\"submit\">Отправить заявку</button>"));
        assert!(body.contains("href=\"?section=contact#contact\" class=\"active\""));
    }

    #[tokio::test]
    async fn test_rejected_post_keeps_the_fields_and_shows_the_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post_form(app_with_endpoint(&server.uri()), IVAN).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("role=\"alert\"><strong>Ошибка отправки</strong>"));
        assert!(body.contains("value=\"Ivan\""));
        assert!(body.contains("value=\"ivan@example.com\""));
        assert!(body.contains("value=\"+7900...\""));
        assert!(body.contains(">Hello</textarea>"));
    }

    #[tokio::test]
    async fn test_post_with_unreachable_endpoint_shows_the_same_error() {
        let (status, body) = post_form(app_with_endpoint("http://127.0.0.1:1/"), IVAN).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("role=\"alert\"><strong>Ошибка отправки</strong>"));
        assert!(body.contains("value=\"Ivan\""));
    }

    #[tokio::test]
    async fn test_post_with_blank_field_never_calls_the_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (_, body) = post_form(
            app_with_endpoint(&server.uri()),
            "name=Ivan&email=&phone=%2B7900&message=Hello",
        )
        .await;
        assert!(body.contains("Ошибка отправки"));
        assert!(body.contains("value=\"Ivan\""));
    }
}
