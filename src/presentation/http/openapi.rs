// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::profiles::get_own_profile,
        crate::presentation::http::controllers::profiles::upsert_profile,
        crate::presentation::http::controllers::profiles::list_profiles,
        crate::presentation::http::controllers::profiles::get_profile_by_id,
        crate::presentation::http::controllers::profiles::delete_account,
        crate::presentation::http::controllers::profiles::add_experience,
        crate::presentation::http::controllers::profiles::remove_experience,
        crate::presentation::http::controllers::profiles::add_education,
        crate::presentation::http::controllers::profiles::remove_education,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::MessageResponse,
            crate::presentation::http::error::FieldErrorResponse,
            crate::presentation::http::error::ValidationErrorResponse,
            crate::presentation::http::controllers::profiles::UpsertProfileRequest,
            crate::presentation::http::controllers::profiles::AddExperienceRequest,
            crate::presentation::http::controllers::profiles::AddEducationRequest,
            crate::application::dto::ProfileDto,
            crate::application::dto::ProfileOwnerDto,
            crate::application::dto::ExperienceDto,
            crate::application::dto::EducationDto,
            crate::application::dto::AckDto
        )
    ),
    tags(
        (name = "Profiles", description = "Developer profile endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Profile Service API",
        description = "Developer profiles with experience and education history",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
        components.add_security_scheme(
            "legacyToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-auth-token"))),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:5000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, Redoc at `/redoc`, raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
