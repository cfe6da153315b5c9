use shared::fortune::{default_model, endpoint};
use shared::SpinConfig;

pub const FORTUNE_API_BASE: &str = "https://generativelanguage.googleapis.com";

// Baked in at build time; the page has no other way to receive secrets.
pub fn fortune_api_key() -> Option<String> {
    option_env!("GEMINI_API_KEY")
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

pub fn fortune_url() -> String {
    let model = option_env!("GEMINI_MODEL").unwrap_or_else(default_model);
    endpoint(FORTUNE_API_BASE, model)
}

/// Pacing parameters, optionally overridden with a JSON `SpinConfig` in
/// `WHEEL_SPIN_CONFIG` at build time.
pub fn spin_config() -> SpinConfig {
    match option_env!("WHEEL_SPIN_CONFIG") {
        Some(raw) => SpinConfig::from_json(raw).unwrap_or_else(|e| {
            log::warn!("Invalid WHEEL_SPIN_CONFIG, using defaults: {}", e);
            SpinConfig::default()
        }),
        None => SpinConfig::default(),
    }
}
