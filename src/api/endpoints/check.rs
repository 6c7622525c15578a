//! Submission check endpoint — CSV upload in, three result collections out.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::check::{self, CheckReport};
use crate::dataset::Table;
use crate::reference::ReferenceData;
use crate::report::{self, RunSummary};

/// Multipart field name carrying the submission CSV.
const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct CheckResponse {
    pub summary: RunSummary,
    pub report: CheckReport,
}

/// `POST /api/check` — multipart upload of a submission CSV.
///
/// Input-shape problems (missing column, unresolvable justification
/// column) reject this submission with a structured 400; the reference
/// data is untouched either way.
pub async fn submit(
    State(reference): State<Arc<ReferenceData>>,
    mut multipart: Multipart,
) -> Result<Json<CheckResponse>, ApiError> {
    let mut uploaded: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ApiError::BadRequest(err.to_string()))?;
            uploaded = Some(bytes.to_vec());
        }
    }

    let uploaded =
        uploaded.ok_or_else(|| ApiError::BadRequest("ファイルをアップロードしてください。".to_string()))?;

    let table = Table::from_reader(uploaded.as_slice())?;
    let rows = check::parse_submission(&table)?;
    let report = check::run_checks(&reference, &rows);
    let summary = report::summarize(&report);

    tracing::info!(
        rows = summary.row_count,
        needs_review = summary.needs_review,
        violations = summary.violation_count,
        unknown_words = summary.unknown_word_count,
        "submission checked"
    );

    Ok(Json(CheckResponse { summary, report }))
}
