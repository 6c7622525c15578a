//! Check API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::endpoints;
use crate::reference::ReferenceData;

/// Maximum submission upload size (4 MB — the forms are a few kilobytes).
const MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Build the check API router over shared, immutable reference data.
pub fn check_api_router(reference: Arc<ReferenceData>) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/check", post(endpoints::check::submit))
        .with_state(reference);

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // The upload form is served from a file:// page or another origin
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::dataset::Table;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn reference() -> Arc<ReferenceData> {
        let catalog = Table::new(
            strings(&["教科名", "種目", "発行者略称", "教科書番号", "書籍名"]),
            vec![strings(&["国語", "教科書", "A社", "001", "新しい国語"])],
        );
        let guidelines = Table::new(
            strings(&["使用する表現", "備考"]),
            vec![
                strings(&["子ども", "×子供"]),
                strings(&["「国語」「算数」等の科目名", "科目名は引用符で囲む"]),
            ],
        );
        Arc::new(ReferenceData::from_tables(&catalog, &guidelines).unwrap())
    }

    fn multipart_body(boundary: &str, csv: &str) -> Body {
        let payload = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"submission.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{boundary}--\r\n"
        );
        Body::from(payload)
    }

    async fn post_csv(csv: &str) -> (StatusCode, serde_json::Value) {
        let boundary = "checker-test-boundary";
        let request = Request::builder()
            .method("POST")
            .uri("/api/check")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(multipart_body(boundary, csv))
            .unwrap();

        let response = check_api_router(reference()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_reports_reference_counts() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = check_api_router(reference()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["catalog_entries"], 1);
        assert_eq!(json["pattern_count"], 2);
    }

    #[tokio::test]
    async fn check_returns_report_for_valid_submission() {
        let csv = "教科,種目,発行者の略称,教科書の番号,書名,選定理由\n\
                   国語,教科書,A社,001,新しい国語,他社と比較して選定した。\n";
        let (status, json) = post_csv(csv).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"]["row_count"], 1);
        assert_eq!(json["summary"]["needs_review"], 0);
        // Missing self-reference phrase is the single finding
        assert_eq!(json["summary"]["violation_count"], 1);
        assert_eq!(json["summary"]["unknown_word_count"], 0);
        assert_eq!(json["report"]["rows"][0]["judgement"]["combined"], "OK");
    }

    #[tokio::test]
    async fn check_flags_catalog_mismatch() {
        let csv = "教科,種目,発行者の略称,教科書の番号,書名,選定理由\n\
                   英語,教科書,A社,001,新しい国語,他社と比較して本校生徒に適している。\n";
        let (status, json) = post_csv(csv).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"]["needs_review"], 1);
        assert_eq!(
            json["report"]["rows"][0]["judgement"]["combined"],
            "要確認"
        );
        assert_eq!(json["summary"]["violation_count"], 0);
    }

    #[tokio::test]
    async fn missing_column_rejects_with_structured_400() {
        let csv = "教科,種目,発行者の略称,書名,選定理由\n国語,教科書,A社,新しい国語,x\n";
        let (status, json) = post_csv(csv).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("教科書の番号"));
        assert!(message.contains("利用可能な列"));
    }

    #[tokio::test]
    async fn upload_without_file_field_rejected() {
        let boundary = "checker-test-boundary";
        let payload = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/check")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(payload))
            .unwrap();

        let response = check_api_router(reference()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
