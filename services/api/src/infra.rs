use axum::http::{header, HeaderMap};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Coarse device classification derived from the User-Agent header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub(crate) fn label(self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Mobile => "mobile",
        }
    }
}

const MOBILE_MARKERS: [&str; 4] = ["iphone", "android", "blackberry", "mobile"];

/// Substring sniff over the lowercased user agent. Evaluated per request;
/// the result is never cached across requests.
pub(crate) fn classify_user_agent(user_agent: &str) -> DeviceClass {
    let normalized = user_agent.to_lowercase();
    if MOBILE_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
    {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Missing or unreadable User-Agent headers fall back to the desktop view.
pub(crate) fn device_from_headers(headers: &HeaderMap) -> DeviceClass {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(classify_user_agent)
        .unwrap_or(DeviceClass::Desktop)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iphone_agents_classify_as_mobile() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        assert_eq!(classify_user_agent(ua), DeviceClass::Mobile);
    }

    #[test]
    fn android_marker_is_case_insensitive() {
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (Linux; ANDROID 14; Pixel 8)"),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn desktop_browsers_classify_as_desktop() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
        assert_eq!(classify_user_agent(ua), DeviceClass::Desktop);
    }

    #[test]
    fn empty_agent_falls_back_to_desktop() {
        assert_eq!(classify_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn parse_date_accepts_iso_and_trims() {
        let date = parse_date(" 2024-01-01 ").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid"));
        assert!(parse_date("01/01/2024").is_err());
    }
}
