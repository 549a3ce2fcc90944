pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_extract;
use crate::screening::handlers::{
    handle_screening, handle_screening_download, handle_screening_preview,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/documents/extract", post(handle_extract))
        .route("/api/v1/screenings", post(handle_screening))
        .route(
            "/api/v1/screenings/preview",
            post(handle_screening_preview),
        )
        .route(
            "/api/v1/screenings/download",
            post(handle_screening_download),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::docx::tests::docx_fixture;
    use crate::screening::prompts::SCREENING_SYSTEM_PROMPT;
    use crate::screening::screener::tests::FakeModel;

    const BOUNDARY: &str = "screening-test-boundary";
    const MODEL_ANSWER: &str = "## 1. Summary Table\n| Candidate ID | Fit Score (0-10) | Verdict |\n|---|---|---|\n| 1 | 8 | Hire |";

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, Vec<u8>),
    }

    fn multipart_request(uri: &str, parts: Vec<Part<'_>>) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                        )
                        .as_bytes(),
                    );
                }
                Part::File(name, file_name, data) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(&data);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn app(llm: Arc<FakeModel>) -> Router {
        build_router(AppState {
            llm,
            config: Config::for_tests(),
        })
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::new(FakeModel::answering("")))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "screening-api");
    }

    #[tokio::test]
    async fn test_index_serves_upload_form() {
        let response = app(Arc::new(FakeModel::answering("")))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        for field in ["jd_text", "jd_file", "resumes", "resumes_text"] {
            assert!(html.contains(&format!("name=\"{field}\"")));
        }
    }

    #[tokio::test]
    async fn test_screening_returns_report_for_files_and_pasted_text() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Python backend engineer with Django"),
                Part::File("resumes", "alice.txt", b"Alice\nDjango, 5 years".to_vec()),
                Part::File(
                    "resumes",
                    "bob.docx",
                    docx_fixture(&["Bob", "Flask, PostgreSQL"]),
                ),
                Part::Text("resumes_text", "Carol\nRails\n---\nDan\nGo"),
            ],
        );

        let response = app(llm.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["model"], "fake-model");
        assert_eq!(json["candidates"].as_array().unwrap().len(), 4);
        assert_eq!(json["candidates"][1]["source"]["file_name"], "bob.docx");
        assert_eq!(json["candidates"][3]["source"]["kind"], "pasted");
        let markdown = json["report_markdown"].as_str().unwrap();
        assert!(markdown.contains("| 1 | 8 | Hire |"));

        let prompts = llm.prompts.lock().unwrap();
        let (system, prompt) = &prompts[0];
        assert_eq!(system, SCREENING_SYSTEM_PROMPT);
        assert!(prompt.starts_with("Job Description:\nPython backend engineer with Django"));
        assert!(prompt.contains("Candidate 1 Resume:\nAlice\nDjango, 5 years"));
        assert!(prompt.contains("Candidate 2 Resume:\nBob\nFlask, PostgreSQL"));
        assert!(prompt.contains("Candidate 3 Resume:\nCarol\nRails"));
        assert!(prompt.contains("Candidate 4 Resume:\nDan\nGo"));
    }

    #[tokio::test]
    async fn test_jd_file_overrides_pasted_jd() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "pasted JD"),
                Part::File("jd_file", "jd.txt", b"Staff Rust engineer".to_vec()),
                Part::Text("resumes_text", "Alice\nRust"),
            ],
        );

        let response = app(llm.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let prompts = llm.prompts.lock().unwrap();
        assert!(prompts[0].1.starts_with("Job Description:\nStaff Rust engineer\n"));
        assert!(!prompts[0].1.contains("pasted JD"));
    }

    #[tokio::test]
    async fn test_untouched_file_inputs_are_ignored() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::File("jd_file", "", Vec::new()),
                Part::File("resumes", "", Vec::new()),
                Part::Text("resumes_text", "Alice\nRust"),
            ],
        );

        let response = app(llm).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["candidates"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_download_returns_markdown_attachment() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings/download",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::Text("resumes_text", "Alice\nRust"),
            ],
        );

        let response = app(llm).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"screening_report_"));
        assert!(disposition.ends_with(".md\""));

        let markdown = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(markdown.starts_with("# Resume Screening Report"));
        assert!(markdown.contains("| 1 | 8 | Hire |"));
    }

    #[tokio::test]
    async fn test_missing_job_description_is_rejected() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings",
            vec![Part::Text("resumes_text", "Alice\nRust")],
        );

        let response = app(llm.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_candidates_is_rejected() {
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::Text("resumes_text", "  ---  "),
            ],
        );

        let response = app(Arc::new(FakeModel::answering(MODEL_ANSWER)))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_broken_resume_surfaces_extraction_error() {
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::File("resumes", "broken.docx", b"not a zip archive".to_vec()),
            ],
        );

        let response = app(Arc::new(FakeModel::answering(MODEL_ANSWER)))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("broken.docx"));
    }

    #[tokio::test]
    async fn test_model_failure_is_bad_gateway() {
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::Text("resumes_text", "Alice\nRust"),
            ],
        );

        let response = app(Arc::new(FakeModel::failing(429)))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "LLM_ERROR");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        // Config::for_tests() allows 1 MB.
        let request = multipart_request(
            "/api/v1/screenings",
            vec![
                Part::Text("jd_text", "Rust engineer"),
                Part::File("resumes", "huge.txt", vec![b'a'; 2 * 1024 * 1024]),
            ],
        );

        let response = app(Arc::new(FakeModel::answering(MODEL_ANSWER)))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_extract_endpoint_previews_document() {
        let request = multipart_request(
            "/api/v1/documents/extract",
            vec![Part::File(
                "file",
                "resume.docx",
                docx_fixture(&["Jane Doe", "Rust"]),
            )],
        );

        let response = app(Arc::new(FakeModel::answering("")))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["format"], "docx");
        assert_eq!(json["text"], "Jane Doe\nRust");
        assert_eq!(json["char_count"], 13);
    }

    #[tokio::test]
    async fn test_extract_endpoint_requires_file() {
        let request = multipart_request(
            "/api/v1/documents/extract",
            vec![Part::Text("note", "no file here")],
        );

        let response = app(Arc::new(FakeModel::answering("")))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preview_reports_detection_without_calling_model() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings/preview",
            vec![
                Part::File("jd_file", "jd.txt", b"Staff Rust engineer".to_vec()),
                Part::File("resumes", "alice.txt", b"Alice\nRust".to_vec()),
                Part::File("resumes", "scan.pdf.txt", b"  \n ".to_vec()),
                Part::Text("resumes_text", "Bob\nGo\n---\nCarol\nZig"),
            ],
        );

        let response = app(llm.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["job_description_detected"], true);
        assert_eq!(json["job_description_chars"], 19);
        assert_eq!(json["candidates"].as_array().unwrap().len(), 3);
        assert_eq!(json["candidates"][0]["source"]["file_name"], "alice.txt");
        assert_eq!(json["skipped"][0]["file_name"], "scan.pdf.txt");
        assert!(llm.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_without_job_description() {
        let llm = Arc::new(FakeModel::answering(MODEL_ANSWER));
        let request = multipart_request(
            "/api/v1/screenings/preview",
            vec![Part::Text("resumes_text", "Alice\nRust")],
        );

        let response = app(llm.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["job_description_detected"], false);
        assert_eq!(json["candidates"].as_array().unwrap().len(), 1);
        assert!(llm.prompts.lock().unwrap().is_empty());
    }
}
