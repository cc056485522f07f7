use std::env;

use crate::i18n::Locale;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub locale: Locale,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            locale: env::var("BOOKING_LOCALE")
                .ok()
                .and_then(|v| Locale::from_str(&v))
                .unwrap_or_default(),
        }
    }
}
