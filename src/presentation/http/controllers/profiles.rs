// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::{
        AddEducationCommand, AddExperienceCommand, RemoveEducationCommand,
        RemoveExperienceCommand, UpsertProfileCommand,
    },
    dto::{AckDto, ProfileDto},
    queries::profiles::GetProfileByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    /// Comma separated, e.g. `"rust, sql"`.
    pub skills: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub links: Option<Vec<Value>>,
}

impl From<UpsertProfileRequest> for UpsertProfileCommand {
    fn from(req: UpsertProfileRequest) -> Self {
        Self {
            website: req.website,
            location: req.location,
            bio: req.bio,
            status: req.status,
            githubusername: req.githubusername,
            skills: req.skills,
            links: req.links,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl From<AddExperienceRequest> for AddExperienceCommand {
    fn from(req: AddExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddEducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl From<AddEducationRequest> for AddEducationCommand {
    fn from(req: AddEducationRequest) -> Self {
        Self {
            school: req.school,
            degree: req.degree,
            fieldofstudy: req.fieldofstudy,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/profile/me",
    responses(
        (status = 200, description = "The caller's profile.", body = ProfileDto),
        (status = 400, description = "The caller has no profile.", body = crate::presentation::http::error::MessageResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn get_own_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_own_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated.", body = ProfileDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn upsert_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(body): JsonBody<UpsertProfileRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command: UpsertProfileCommand = body.into();
    state
        .services
        .profile_commands
        .upsert_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Every profile with its owner.", body = [ProfileDto]),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    tag = "Profiles"
)]
pub async fn list_profiles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProfileDto>>> {
    state
        .services
        .profile_queries
        .list_profiles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/profile/{profileid}",
    params(("profileid" = String, Path, description = "Profile identifier")),
    responses(
        (status = 200, description = "The requested profile.", body = ProfileDto),
        (status = 400, description = "Unknown or malformed id.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    tag = "Profiles"
)]
pub async fn get_profile_by_id(
    Extension(state): Extension<HttpState>,
    Path(profile_id): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .get_profile_by_id(GetProfileByIdQuery { profile_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile and user removed.", body = AckDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn delete_account(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AckDto>> {
    state
        .services
        .profile_commands
        .delete_account(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/profile/experience",
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "Experience entry added.", body = ProfileDto),
        (status = 400, description = "Validation failed or no profile.", body = crate::presentation::http::error::ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 409, description = "Profile changed concurrently.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn add_experience(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(body): JsonBody<AddExperienceRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command: AddExperienceCommand = body.into();
    state
        .services
        .profile_commands
        .add_experience(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    params(("exp_id" = String, Path, description = "Experience entry identifier")),
    responses(
        (status = 200, description = "Profile after removal.", body = ProfileDto),
        (status = 400, description = "The caller has no profile.", body = crate::presentation::http::error::MessageResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 409, description = "Profile changed concurrently.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn remove_experience(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(entry_id): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_commands
        .remove_experience(&user, RemoveExperienceCommand { entry_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/profile/education",
    request_body = AddEducationRequest,
    responses(
        (status = 200, description = "Education entry added.", body = ProfileDto),
        (status = 400, description = "Validation failed or no profile.", body = crate::presentation::http::error::ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 409, description = "Profile changed concurrently.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn add_education(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(body): JsonBody<AddEducationRequest>,
) -> HttpResult<Json<ProfileDto>> {
    let command: AddEducationCommand = body.into();
    state
        .services
        .profile_commands
        .add_education(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    params(("edu_id" = String, Path, description = "Education entry identifier")),
    responses(
        (status = 200, description = "Profile after removal.", body = ProfileDto),
        (status = 400, description = "The caller has no profile.", body = crate::presentation::http::error::MessageResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::MessageResponse),
        (status = 409, description = "Profile changed concurrently.", body = crate::presentation::http::error::MessageResponse),
        (status = 500, description = "Unexpected server error.", body = String)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn remove_education(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(entry_id): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_commands
        .remove_education(&user, RemoveEducationCommand { entry_id })
        .await
        .into_http()
        .map(Json)
}
