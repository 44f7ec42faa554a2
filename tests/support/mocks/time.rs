// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use profile_service::application::ports::time::Clock;
use std::sync::Mutex;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Clock that starts at [`fixed_now`] and moves one second per reading, so
/// consecutive writes get distinct `updated_at` values.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            current: Mutex::new(fixed_now()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut guard = self.current.lock().expect("clock lock");
        let now = *guard;
        *guard = now + Duration::seconds(1);
        now
    }
}
