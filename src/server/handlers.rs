use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::export::{ExportKind, export};
use crate::generation::{AppInput, GenerationResult, Orchestrator};
use crate::status::StatusUpdate;

const PARTIAL_SUCCESS: &str = "Some content generated successfully, but some agents failed";

#[derive(Serialize)]
struct PartialResult<'a> {
    #[serde(flatten)]
    result: &'a GenerationResult,
    warnings: &'a [String],
    message: &'static str,
}

/// POST /api/generate
pub async fn generate(
    orchestrator: web::Data<Orchestrator>,
    input: web::Json<AppInput>,
) -> Result<HttpResponse, ApiError> {
    let outcome = orchestrator.generate(&input).await?;

    if outcome.is_partial() {
        return Ok(HttpResponse::build(StatusCode::MULTI_STATUS).json(PartialResult {
            result: &outcome.result,
            warnings: &outcome.warnings,
            message: PARTIAL_SUCCESS,
        }));
    }
    Ok(HttpResponse::Ok().json(&outcome.result))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    project_id: Option<String>,
}

fn required_project_id(project_id: Option<String>) -> Result<String, ApiError> {
    project_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("projectId is required".to_string()))
}

/// GET /api/generate/status?projectId=
pub async fn get_status(
    orchestrator: web::Data<Orchestrator>,
    query: web::Query<StatusQuery>,
) -> Result<HttpResponse, ApiError> {
    let project_id = required_project_id(query.into_inner().project_id)?;
    let record = orchestrator
        .store()
        .get(&project_id)
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /api/generate/status
pub async fn post_status(
    orchestrator: web::Data<Orchestrator>,
    update: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let mut update = update.into_inner();
    let project_id = required_project_id(update.project_id.take())?;
    orchestrator.store().put(&project_id, update.into_record());
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(rename = "type")]
    kind: Option<ExportKind>,
    data: Option<GenerationResult>,
}

/// POST /api/download
pub async fn download(request: web::Json<DownloadRequest>) -> Result<HttpResponse, ApiError> {
    let DownloadRequest { kind, data } = request.into_inner();
    let (Some(kind), Some(data)) = (kind, data) else {
        return Err(ApiError::BadRequest("Missing type or data".to_string()));
    };

    let file = export(kind, &data)?;
    log::info!("Download {} ({} bytes)", file.filename, file.body.len());
    Ok(HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header((header::CONTENT_DISPOSITION, file.content_disposition()))
        .body(file.body))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
