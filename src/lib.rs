use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod forms;
pub mod intake;

pub use crate::api::AppState;

use crate::config::ServerConfig;
use crate::forms::{FormGenerator, TemplateStore};
use crate::intake::Normalizer;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generate_forms,
        crate::api::handlers::normalize_intake,
        crate::api::handlers::health
    ),
    components(
        schemas(
            intake::RawIntake,
            intake::CaseRecord,
            forms::FormId,
            api::models::FormsResponse,
            api::models::FormsMetadata,
            api::models::ValidationErrorResponse,
            api::models::BadRequestBody,
            api::models::HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Probate Forms", description = "Intake normalization and form filling."),
        (name = "Health", description = "Liveness probe.")
    )
)]
pub struct ApiDoc;

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    let templates = TemplateStore::load_dir(&config.template_dir).with_context(|| {
        format!("failed to load templates from {}", config.template_dir.display())
    })?;
    if templates.is_empty() {
        log::warn!(
            "No form templates found in {}; every form request will fail",
            config.template_dir.display()
        );
    }

    let app_state = web::Data::new(AppState::new(
        Normalizer::new(config.intake.clone()),
        FormGenerator::with_acroform_engine(templates),
    ));

    let prometheus = PrometheusMetricsBuilder::new("probate_forms_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {}", e))?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .app_data(app_state.clone())
            .route("/health", web::get().to(api::handlers::health))
            .service(web::scope("/api").configure(api::config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
