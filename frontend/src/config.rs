use crate::{error::AttendanceError, pages::attendance::types::SheetPeriod};
use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_SHEET_YEAR: i32 = 2025;
pub const DEFAULT_SHEET_MONTH: u32 = 7;
pub const DEFAULT_DISPLAY_DAYS: u32 = 16;
pub const DEFAULT_TIME_ZONE: &str = "UTC";

const GLOBAL_CONFIG_KEY: &str = "__ATTENDANCE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub sheet_year: i32,
    pub sheet_month: u32,
    pub display_days: u32,
    pub time_zone: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sheet_year: DEFAULT_SHEET_YEAR,
            sheet_month: DEFAULT_SHEET_MONTH,
            display_days: DEFAULT_DISPLAY_DAYS,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Clamps out-of-range values so the sheet always renders valid dates.
    pub fn validated(mut self) -> Self {
        if !(1..=12).contains(&self.sheet_month) {
            warn!(
                "sheet_month {} out of range, using {}",
                self.sheet_month, DEFAULT_SHEET_MONTH
            );
            self.sheet_month = DEFAULT_SHEET_MONTH;
        }
        let clamped_days = self.display_days.clamp(1, 31);
        if clamped_days != self.display_days {
            warn!(
                "display_days {} out of range, using {}",
                self.display_days, clamped_days
            );
            self.display_days = clamped_days;
        }
        if let Err(err) = self.tz() {
            warn!("{err}, falling back to {DEFAULT_TIME_ZONE}");
            self.time_zone = DEFAULT_TIME_ZONE.to_string();
        }
        self
    }

    pub fn period(&self) -> SheetPeriod {
        SheetPeriod::new(self.sheet_year, self.sheet_month)
    }

    pub fn tz(&self) -> Result<Tz, AttendanceError> {
        self.time_zone
            .trim()
            .parse::<Tz>()
            .map_err(|_| AttendanceError::InvalidTimeZone(self.time_zone.clone()))
    }
}

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, AttendanceError> {
    serde_json::from_str::<RuntimeConfig>(raw)
        .map(RuntimeConfig::validated)
        .map_err(|err| AttendanceError::Config(err.to_string()))
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Resolved config, or defaults while `init` has not completed.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    current().tz().unwrap_or(Tz::UTC)
}

fn snapshot_from_globals() -> Option<String> {
    // Optional global object: window.__ATTENDANCE_CONFIG = { sheet_month: 7, ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &GLOBAL_CONFIG_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

async fn fetch_runtime_config() -> anyhow::Result<String> {
    let href = web_sys::window()
        .ok_or_else(|| anyhow::anyhow!("no global `window` exists"))?
        .location()
        .href()
        .map_err(|_| anyhow::anyhow!("window.location is unavailable"))?;
    let url = reqwest::Url::parse(&href)?.join("config.json")?;
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.text().await?)
}

async fn resolve() -> RuntimeConfig {
    if let Some(raw) = snapshot_from_globals() {
        match parse_runtime_config(&raw) {
            Ok(cfg) => return cfg,
            Err(err) => warn!("ignoring window.{GLOBAL_CONFIG_KEY}: {err}"),
        }
    }
    match fetch_runtime_config().await {
        Ok(raw) => match parse_runtime_config(&raw) {
            Ok(cfg) => return cfg,
            Err(err) => warn!("ignoring config.json: {err}"),
        },
        Err(err) => info!("config.json not loaded ({err}), using defaults"),
    }
    RuntimeConfig::default()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = resolve().await;
    info!(
        "sheet period {:04}-{:02}, {} days, time zone {}",
        resolved.sheet_year, resolved.sheet_month, resolved.display_days, resolved.time_zone
    );
    let _ = RUNTIME_CONFIG.set(resolved);
    current()
}
