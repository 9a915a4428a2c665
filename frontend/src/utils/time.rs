use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

/// Time stamp stored on a freshly marked entry.
pub fn entry_time_label(at: &DateTime<Tz>) -> String {
    at.format("%H:%M:%S").to_string()
}

pub fn current_entry_time() -> String {
    entry_time_label(&now_in_app_tz())
}
