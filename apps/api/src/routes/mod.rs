pub mod health;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers::handle_assist;
use crate::ats::handlers::{handle_analyze, handle_analyze_stored};
use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(templates::list_templates_handler))
        // ATS scoring
        .route("/api/v1/ats/analyze", post(handle_analyze))
        // Resume records
        .route(
            "/api/v1/resumes",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/duplicate",
            post(handlers::handle_duplicate_resume),
        )
        .route("/api/v1/resumes/:id/analyze", post(handle_analyze_stored))
        .route(
            "/api/v1/resumes/:id/export",
            get(handlers::handle_export_resume),
        )
        // AI assist
        .route("/api/v1/assist", post(handle_assist))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::resumes::store::memory::InMemoryResumeStore;

    fn make_router() -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryResumeStore::default()),
            llm: None,
        })
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn sample_content() -> Value {
        json!({
            "personalInfo": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phone": "+44 20 7946 0958",
                "location": "London",
                "github": "github.com/ada"
            },
            "summary": "I am a software engineer.",
            "skills": [{ "id": "1", "name": "Rust" }]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(&make_router(), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vitae-api");
        assert_eq!(body["assist_enabled"], false);
    }

    #[tokio::test]
    async fn test_templates_listed() {
        let response = send(&make_router(), Method::GET, "/api/v1/templates", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let templates = body_json(response).await;
        assert_eq!(templates.as_array().unwrap().len(), 5);
        assert_eq!(templates[0]["id"], "modern");
    }

    #[tokio::test]
    async fn test_analyze_snapshot() {
        let router = make_router();
        let response = send(&router, Method::POST, "/api/v1/ats/analyze", Some(json!({}))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["grade"], "F");
        assert_eq!(body["score"], 8);
        assert_eq!(body["checks"].as_array().unwrap().len(), 8);
        assert_eq!(body["checks"][1]["message"], "No professional summary found");
        assert_eq!(body["groups"].as_array().unwrap().len(), 8);
        assert!(body["improvements"].as_array().unwrap().len() <= 5);
    }

    #[tokio::test]
    async fn test_resume_lifecycle() {
        let router = make_router();
        let user = Uuid::new_v4();

        // create
        let response = send(
            &router,
            Method::POST,
            "/api/v1/resumes",
            Some(json!({ "user_id": user, "title": "Backend", "content": sample_content() })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["template_id"], "modern");
        assert!(created["ats_score"].is_null());
        let id = created["id"].as_str().unwrap().to_string();

        // analyze and persist
        let uri = format!("/api/v1/resumes/{id}/analyze?user_id={user}");
        let response = send(&router, Method::POST, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let analysis = body_json(response).await;
        let score = analysis["score"].as_u64().unwrap();

        let uri = format!("/api/v1/resumes/{id}?user_id={user}");
        let fetched = body_json(send(&router, Method::GET, &uri, None).await).await;
        assert_eq!(fetched["ats_score"].as_u64(), Some(score));

        // listing carries the stored score
        let uri = format!("/api/v1/resumes?user_id={user}");
        let listed = body_json(send(&router, Method::GET, &uri, None).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["ats_score"].as_u64(), Some(score));

        // content edits clear the stale score
        let uri = format!("/api/v1/resumes/{id}?user_id={user}");
        let response = send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({ "template_id": "classic", "content": { "summary": "Updated" } })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["template_id"], "classic");
        assert_eq!(updated["title"], "Backend");
        assert!(updated["ats_score"].is_null());

        // duplicate
        let uri = format!("/api/v1/resumes/{id}/duplicate?user_id={user}");
        let response = send(&router, Method::POST, &uri, None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["title"], "Backend (Copy)");

        // delete
        let uri = format!("/api/v1/resumes/{id}?user_id={user}");
        let response = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unmodelled_sections_survive_save_and_count_for_formatting() {
        let router = make_router();
        let user = Uuid::new_v4();

        let response = send(
            &router,
            Method::POST,
            "/api/v1/resumes",
            Some(json!({
                "user_id": user,
                "content": {
                    "summary": "x",
                    "volunteer": [{ "role": "Mentor 🚀" }],
                    "personalInfo": { "firstName": "Ada", "twitter": "@ada" }
                }
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let uri = format!("/api/v1/resumes/{id}?user_id={user}");
        let fetched = body_json(send(&router, Method::GET, &uri, None).await).await;
        assert_eq!(fetched["content"]["volunteer"][0]["role"], "Mentor 🚀");
        assert_eq!(fetched["content"]["personalInfo"]["twitter"], "@ada");

        // updates keep them too
        let response = send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({ "content": { "summary": "y", "hobbies": ["chess"] } })),
        )
        .await;
        let updated = body_json(response).await;
        assert_eq!(updated["content"]["hobbies"], json!(["chess"]));

        let response = send(
            &router,
            Method::POST,
            "/api/v1/ats/analyze",
            Some(json!({ "summary": "Plain", "volunteer": ["Mentor 🚀"] })),
        )
        .await;
        let analysis = body_json(response).await;
        assert_eq!(analysis["checks"][7]["category"], "formatting");
        assert_eq!(analysis["checks"][7]["score"], 3);
    }

    #[tokio::test]
    async fn test_other_users_resume_is_not_found() {
        let router = make_router();
        let owner = Uuid::new_v4();
        let created = body_json(
            send(
                &router,
                Method::POST,
                "/api/v1/resumes",
                Some(json!({ "user_id": owner })),
            )
            .await,
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let uri = format!("/api/v1/resumes/{id}?user_id={}", Uuid::new_v4());
        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title_and_unknown_template() {
        let router = make_router();
        let user = Uuid::new_v4();

        let response = send(
            &router,
            Method::POST,
            "/api/v1/resumes",
            Some(json!({ "user_id": user, "title": "  " })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &router,
            Method::POST,
            "/api/v1/resumes",
            Some(json!({ "user_id": user, "template_id": "neon" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_export_text_and_json() {
        let router = make_router();
        let user = Uuid::new_v4();
        let created = body_json(
            send(
                &router,
                Method::POST,
                "/api/v1/resumes",
                Some(json!({ "user_id": user, "title": "Ada CV", "content": sample_content() })),
            )
            .await,
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let uri = format!("/api/v1/resumes/{id}/export?user_id={user}&format=text");
        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ada-cv.txt\""
        );
        let text = body_text(response).await;
        assert!(text.starts_with("Ada Lovelace\n"));
        assert!(text.contains("SKILLS\nRust"));

        let uri = format!("/api/v1/resumes/{id}/export?user_id={user}&format=json");
        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let exported = body_json(response).await;
        assert_eq!(exported["personalInfo"]["firstName"], "Ada");

        let uri = format!("/api/v1/resumes/{id}/export?user_id={user}&format=pdf");
        let response = send(&router, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assist_unavailable_without_key() {
        let response = send(
            &make_router(),
            Method::POST,
            "/api/v1/assist",
            Some(json!({ "kind": "summary" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["error"]["code"], "ASSIST_UNAVAILABLE");
    }
}
