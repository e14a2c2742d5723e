use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
    pub poll_interval_secs: Option<u64>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();
static POLL_INTERVAL: OnceLock<Duration> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // window.__FACETRACK_ENV / window.__FACETRACK_CONFIG = { api_base_url: "...", ... }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match parse_runtime_config(&json) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed {}: {:#}", name, err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_global("__FACETRACK_ENV").or_else(|| read_global("__FACETRACK_CONFIG"))
}

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    let cfg: RuntimeConfig =
        serde_json::from_str(raw).context("runtime config is not valid JSON")?;
    if let Some(zone) = cfg.time_zone.as_deref() {
        zone.parse::<Tz>()
            .map_err(|e| anyhow!("unknown time zone `{}`: {}", zone, e))?;
    }
    if cfg.poll_interval_secs == Some(0) {
        return Err(anyhow!("poll_interval_secs must be greater than zero"));
    }
    Ok(cfg)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get(config_json_url())
        .await
        .context("failed to request config.json")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json returned {}", resp.status()));
    }
    let body = resp.text().await.context("failed to read config.json")?;
    parse_runtime_config(&body)
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "/config.json".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://localhost/config.json".into()
}

/// Caches every value the config carries; first writer wins.
pub(crate) fn apply(cfg: &RuntimeConfig) {
    if let Some(url) = &cfg.api_base_url {
        let _ = API_BASE_URL.set(url.trim_end_matches('/').to_string());
    }
    if let Some(tz) = cfg.time_zone.as_deref().and_then(|z| z.parse::<Tz>().ok()) {
        let _ = TIME_ZONE.set(tz);
    }
    if let Some(secs) = cfg.poll_interval_secs.filter(|s| *s > 0) {
        let _ = POLL_INTERVAL.set(Duration::from_secs(secs));
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    init().await;
    API_BASE_URL.get_or_init(|| DEFAULT_API_BASE_URL.to_string()).clone()
}

pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(Tz::UTC)
}

pub fn poll_interval() -> Duration {
    POLL_INTERVAL.get().copied().unwrap_or(DEFAULT_POLL_INTERVAL)
}

pub async fn init() {
    if let Some(cfg) = snapshot_from_globals() {
        apply(&cfg);
        return;
    }
    match fetch_runtime_config().await {
        Ok(cfg) => apply(&cfg),
        Err(err) => log::info!("Using default runtime config: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_runtime_config() {
        let cfg = parse_runtime_config(
            r#"{"api_base_url":"https://school.example/api","time_zone":"Asia/Kolkata","poll_interval_secs":15}"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://school.example/api"));
        assert_eq!(cfg.time_zone.as_deref(), Some("Asia/Kolkata"));
        assert_eq!(cfg.poll_interval_secs, Some(15));
    }

    #[test]
    fn missing_keys_fall_back_to_none() {
        let cfg = parse_runtime_config("{}").unwrap();
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn rejects_unknown_time_zone() {
        let err = parse_runtime_config(r#"{"time_zone":"Mars/Olympus"}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Mars/Olympus"));
    }

    #[test]
    fn rejects_zero_poll_interval() {
        assert!(parse_runtime_config(r#"{"poll_interval_secs":0}"#).is_err());
    }

    #[test]
    fn defaults_apply_before_init() {
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_secs(30));
        assert!(poll_interval() >= Duration::from_secs(1));
    }
}
