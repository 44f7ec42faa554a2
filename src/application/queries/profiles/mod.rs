mod get_by_id;
mod get_own;
mod list;
pub(crate) mod populate;
mod service;

pub use get_by_id::GetProfileByIdQuery;
pub use service::ProfileQueryService;
