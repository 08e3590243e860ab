//! Axum route handlers for report generation, retrieval, and PDF export.

use axum::{
    extract::{Host, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::AnalysisResult;
use crate::config::Config;
use crate::errors::AppError;
use crate::report::models::StoredReport;
use crate::report::store::{is_valid_report_id, ReportStore};
use crate::report::structure::structure_report;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub report_data: Option<AnalysisResult>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    pub success: bool,
    pub data: GeneratedReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub report: StoredReport,
    pub shareable_link: String,
    pub report_id: String,
}

#[derive(Debug, Serialize)]
pub struct ViewReportResponse {
    pub success: bool,
    pub data: StoredReport,
}

#[derive(Debug, Serialize)]
pub struct ExportPdfResponse {
    pub success: bool,
    pub message: String,
    pub data: PdfExport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExport {
    pub pdf_url: String,
}

/// POST /api/report/generate
///
/// Structures the aggregate into tabs, persists it under a fresh ID, and
/// returns the shareable link.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Host(host): Host,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    let report_data = request
        .report_data
        .ok_or_else(|| AppError::Validation("Dados do relatório não fornecidos".to_string()))?;

    let report = structure_report(report_data);
    let report_id = ReportStore::generate_report_id();
    state.reports.save(&report_id, &report).await?;

    let shareable_link = format!(
        "{}/api/report/view/{report_id}",
        base_url(&state.config, &host)
    );
    info!("Report {report_id} generated");

    Ok(Json(GenerateReportResponse {
        success: true,
        data: GeneratedReport {
            report,
            shareable_link,
            report_id,
        },
    }))
}

/// GET /api/report/view/:report_id
pub async fn handle_view_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<ViewReportResponse>, AppError> {
    let report_id = checked_report_id(&report_id)?;
    let report = state
        .reports
        .load(report_id)
        .await?
        .ok_or_else(report_not_found)?;

    Ok(Json(ViewReportResponse {
        success: true,
        data: report,
    }))
}

/// GET /api/report/export/:report_id/pdf
///
/// Export is simulated: the response carries a download URL but no PDF is
/// ever written.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Host(host): Host,
    Path(report_id): Path<String>,
) -> Result<Json<ExportPdfResponse>, AppError> {
    let report_id = checked_report_id(&report_id)?;
    if !state.reports.exists(report_id).await {
        return Err(report_not_found());
    }

    let pdf_url = format!(
        "{}/api/report/download/{report_id}.pdf",
        base_url(&state.config, &host)
    );

    Ok(Json(ExportPdfResponse {
        success: true,
        message: "PDF gerado com sucesso".to_string(),
        data: PdfExport { pdf_url },
    }))
}

fn report_not_found() -> AppError {
    AppError::NotFound("Relatório não encontrado".to_string())
}

fn checked_report_id(report_id: &str) -> Result<&str, AppError> {
    if is_valid_report_id(report_id) {
        Ok(report_id)
    } else {
        Err(AppError::Validation("ID do relatório inválido".to_string()))
    }
}

/// Shareable links embed the public host in production and localhost with the
/// configured port otherwise.
fn base_url(config: &Config, host: &str) -> String {
    if config.is_production() {
        format!("https://{host}")
    } else {
        format!("http://localhost:{}", config.port)
    }
}
