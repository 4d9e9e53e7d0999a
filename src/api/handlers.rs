use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use super::models::{
    BadRequestBody, FormsQuery, FormsResponse, HealthResponse, ValidationErrorResponse,
};
use super::AppState;
use crate::forms::common::today;
use crate::intake::{CaseRecord, RawIntake};
use crate::ErrorResponse;

#[utoipa::path(
    post,
    path = "/api/forms",
    tag = "Probate Forms",
    params(FormsQuery),
    request_body(content = RawIntake, description = "Flat intake questionnaire payload"),
    responses(
        (status = 200, description = "Forms generated", body = FormsResponse),
        (status = 400, description = "Missing required fields or unknown form code", body = BadRequestBody),
        (status = 500, description = "No form could be generated", body = ErrorResponse)
    )
)]
pub async fn generate_forms(
    state: web::Data<AppState>,
    query: web::Query<FormsQuery>,
    body: web::Json<RawIntake>,
) -> impl Responder {
    let submission_id = Uuid::new_v4();
    log::info!("Received intake submission {}", submission_id);

    let forms = match query.selected_forms() {
        Ok(forms) => forms,
        Err(e) => return HttpResponse::BadRequest().json(BadRequestBody::from(e)),
    };

    let record = match state.normalizer.normalize(&body) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Submission {} rejected: {}", submission_id, e);
            return HttpResponse::BadRequest().json(BadRequestBody::from(&e));
        }
    };

    let generated = state.generator.generate_selected(&forms, &record, today());
    if generated.is_empty() {
        let reasons: Vec<String> = generated
            .failures
            .iter()
            .map(|(form, err)| format!("{}: {}", form, err))
            .collect();
        log::error!("Submission {} produced no forms", submission_id);
        return HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&format!(
            "No forms could be generated ({})",
            reasons.join("; ")
        )));
    }

    log::info!(
        "Submission {} complete: {} forms, {} failures",
        submission_id,
        generated.documents.len(),
        generated.failures.len()
    );
    HttpResponse::Ok().json(FormsResponse::new(submission_id, &record, generated))
}

#[utoipa::path(
    post,
    path = "/api/normalize",
    tag = "Probate Forms",
    request_body(content = RawIntake, description = "Flat intake questionnaire payload"),
    responses(
        (status = 200, description = "Normalized case record", body = CaseRecord),
        (status = 400, description = "Missing required fields", body = ValidationErrorResponse)
    )
)]
pub async fn normalize_intake(
    state: web::Data<AppState>,
    body: web::Json<RawIntake>,
) -> impl Responder {
    match state.normalizer.normalize(&body) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => HttpResponse::BadRequest().json(ValidationErrorResponse::from(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// Routes mounted under `/api`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/forms").route(web::post().to(generate_forms)))
        .service(web::resource("/normalize").route(web::post().to(normalize_intake)));
}
