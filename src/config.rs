//! Compile-time site configuration.

use crate::domain::logging::LogLevel;
use std::str::FromStr;

pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
const ACCESS_KEY_PLACEHOLDER: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

/// Per-attempt timeout for the relay request.
pub const RELAY_TIMEOUT_MS: u32 = 10_000;
/// Extra attempts after a transport failure.
pub const RELAY_RETRIES: u32 = 1;

/// Simulated typing time of the chat consultant.
pub const CHAT_REPLY_DELAY_MS: u32 = 1_000;
/// Duration of the hero stats count-up.
pub const COUNT_UP_DURATION_MS: f64 = 2_000.0;

pub const PHONE_DISPLAY: &str = "+7 (999) 123-45-67";
pub const PHONE_HREF: &str = "tel:+79991234567";
pub const TELEGRAM_URL: &str = "https://t.me/premiumauto";
pub const WHATSAPP_URL: &str = "https://wa.me/79991234567";
pub const EMAIL: &str = "info@premiumauto.ru";
pub const ADDRESS: &str = "Москва, ул. Автомобильная, 1";
pub const OPENING_HOURS: &str = "Ежедневно 9:00-21:00";

pub const MAP_STYLE_URL: &str = "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";
/// `[longitude, latitude]` of the showroom.
pub const SHOWROOM_COORDINATES: [f64; 2] = [37.6173, 55.7558];
pub const SHOWROOM_ZOOM: f64 = 13.0;

/// Web3Forms key baked in at build time via `WEB3FORMS_ACCESS_KEY`.
pub fn relay_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or(ACCESS_KEY_PLACEHOLDER)
}

/// Minimum console log level, from `PREMIUM_AUTO_LOG` at build time.
pub fn log_level() -> LogLevel {
    let fallback = if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info };
    option_env!("PREMIUM_AUTO_LOG")
        .and_then(|raw| LogLevel::from_str(raw).ok())
        .unwrap_or(fallback)
}
