pub mod auth;
pub mod profiles;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use profiles::{AckDto, EducationDto, ExperienceDto, ProfileDto, ProfileOwnerDto};
