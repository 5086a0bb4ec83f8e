// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use kb_display::application::ports::{time::Clock, util::SlugGenerator};

#[derive(Clone, Debug, Default)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
