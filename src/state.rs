use crate::config::AppConfig;
use crate::services::clock::Clock;
use crate::services::submission::BookingSink;

pub struct AppState {
    pub config: AppConfig,
    pub clock: Box<dyn Clock>,
    pub sink: Box<dyn BookingSink>,
}
