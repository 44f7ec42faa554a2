// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;
pub mod util;

pub use repos::{InMemoryProfileRepository, InMemoryUserRepository};
pub use security::{EXPIRED_TOKEN, StaticTokenManager, USER_ONE_TOKEN, USER_TWO_TOKEN, authenticated};
pub use time::{SteppingClock, fixed_now};
pub use util::{SequentialIds, entry_id};
